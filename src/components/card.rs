// src/components/card.rs

use std::fmt;

// serde を使う宣言！盤面のスナップショットを JSON で View に渡すときに使うよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♣️♦️♠️
///
/// 並び順は Hearts, Clubs, Diamonds, Spades。
/// 組札 (Foundation) のインデックスもこの順番に対応させてるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

/// スートの色。赤と黒の2色だけ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// ハートとダイヤは赤、クラブとスペードは黒。
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    /// `ALL_SUITS` の中での位置 (= 組札のインデックス)。
    pub const fn index(self) -> usize {
        self as usize
    }

    fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord を付けてあるので `<` や `>` でそのまま比較できる。
/// 判定で使う「ランク番号」は A=0 .. K=12 (`Rank::index`)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// A=0, 2=1, ..., K=12
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 表示用のラベル ("A", "2", ..., "10", "J", "Q", "K")
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 全スート (組札の並び順と同じ)
pub const ALL_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

/// 全ランク (A から K まで昇順)
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カード1枚を表す値だよ！🃏
///
/// スートとランクだけを持つ不変の値。表向き/裏向きはカード自身ではなく、
/// 置かれている場所 (場札なら `Slot`) が管理する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn color(&self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
