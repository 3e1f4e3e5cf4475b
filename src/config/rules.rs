// src/config/rules.rs
//! クロンダイクの盤面サイズに関する定数。
//! 4 スート × 13 ランク、場札 7 列、1 枚引き。変更はできない。

pub const SUIT_COUNT: usize = 4;
pub const RANKS_PER_SUIT: usize = 13;
pub const DECK_SIZE: usize = SUIT_COUNT * RANKS_PER_SUIT; // 52
pub const TABLEAU_COLUMNS: usize = 7;
pub const FOUNDATION_COUNT: usize = SUIT_COUNT;
/// 配り終わった時点で場札に置かれる枚数 (1 + 2 + ... + 7)
pub const TABLEAU_DEAL_COUNT: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2; // 28
pub const STOCK_DEAL_COUNT: usize = DECK_SIZE - TABLEAU_DEAL_COUNT; // 24
