//! ゲームのロジック (デッキ作成と配り方、ルール判定)。

pub mod deck;
pub mod rules;
