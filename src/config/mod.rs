//! 固定の定数たち。実行時に変えられる設定はないよ。

pub mod layout;
pub mod rules;
