// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! 全部、盤面を書き換えない純粋な判定関数。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
