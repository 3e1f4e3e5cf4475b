// src/logic/deck.rs

use log::debug;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::stack::{Column, Slot};
use crate::config::rules::{DECK_SIZE, TABLEAU_COLUMNS};

/// 配り終えた直後の結果。場札 7 列と、残りの山札。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub tableau: [Column; TABLEAU_COLUMNS],
    /// 最後の要素が山札の一番上。
    pub stock: Vec<Card>,
}

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート (`ALL_SUITS`) ごとに A から K まで並んだ決まった順番。
/// 何度呼んでも同じ結果になる。
pub fn build_ordered_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをその場でシャッフルする関数だよ。
///
/// Fisher-Yates: 最後の位置から 1 番目まで下りながら、`0..=i` から選んだ位置と入れ替える。
/// 乱数は呼び出し側から渡すので、テストでは固定シードの RNG を使える。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
}

/// 順番どおりのデッキを作ってシャッフルしたものを返す。
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = build_ordered_deck();
    shuffle_deck(&mut deck, rng);
    deck
}

/// シャッフル済みのデッキを配る。
///
/// デッキの末尾をスタックの一番上として扱い、列 `i` に `i + 1` 枚ずつ pop していく。
/// 最後に pop したカードがその列の一番上になり、そのカードだけ表向き。
/// 残りはそのままの順番で山札になる (全部裏向き)。
pub fn deal(mut deck: Vec<Card>) -> Deal {
    let mut tableau: [Column; TABLEAU_COLUMNS] = Default::default();
    for (index, column) in tableau.iter_mut().enumerate() {
        let count = index + 1;
        for n in 0..count {
            let Some(card) = deck.pop() else {
                debug!("deck ran out while dealing column {}", index);
                break;
            };
            let slot = if n == count - 1 { Slot::face_up(card) } else { Slot::face_down(card) };
            column.slots.push(slot);
        }
    }
    debug!("dealt tableau, {} cards left for the stock", deck.len());
    Deal { tableau, stock: deck }
}
