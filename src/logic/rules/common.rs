//! ルール判定で共通して使うヘルパー関数を置くよ。
//! どれも盤面を書き換えない純粋な関数。

use crate::components::card::{Card, Suit, ALL_SUITS};

/// `candidate` のランクが `target` のちょうど 1 つ上なら true。
/// (A=0 .. K=12 のランク番号の差が 1)
pub fn is_one_rank_higher(candidate: Card, target: Card) -> bool {
    candidate.rank.index() as i16 - target.rank.index() as i16 == 1
}

/// 2つのスートの色が違えば true。赤 = ハート/ダイヤ、黒 = クラブ/スペード。
pub fn is_opposite_color(a: Suit, b: Suit) -> bool {
    a.color() != b.color()
}

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Hearts ❤️, 1: Clubs ♣️, 2: Diamonds ♦️, 3: Spades ♠️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(foundation_index as usize).copied()
}
