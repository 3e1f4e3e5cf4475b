// src/components/stack.rs

// serde を使うためにインポート！StackType は View から JSON で送られてくるよ。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// カードが存在する場所の種類を示す Enum だよ。
/// 山札にあるのか、場札の何列目にあるのか、などを区別する。
/// View とのやり取りでは JSON (`{"Tableau":3}`, `"Waste"` など) になる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。スートごとに4つ。
    /// 0: Hearts, 1: Clubs, 2: Diamonds, 3: Spades (`ALL_SUITS` の順)
    Foundation(u8),
    /// 山札 (Stock)。裏向きで、上からしか引けない。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

/// 場札の1マス。カードと、その向き。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub card: Card,
    pub is_face_up: bool,
}

impl Slot {
    pub const fn face_down(card: Card) -> Self {
        Self { card, is_face_up: false }
    }

    pub const fn face_up(card: Card) -> Self {
        Self { card, is_face_up: true }
    }
}

/// 場札の1列。`slots` の最後が一番上 (top) のカード。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub slots: Vec<Slot>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn top(&self) -> Option<&Slot> {
        self.slots.last()
    }

    /// 一番上のカード (向きは問わない)
    pub fn top_card(&self) -> Option<Card> {
        self.slots.last().map(|slot| slot.card)
    }

    /// 表向きカードが始まる位置。空の列や全部裏向きなら `len()`。
    pub fn face_up_start(&self) -> usize {
        self.slots
            .iter()
            .position(|slot| slot.is_face_up)
            .unwrap_or(self.slots.len())
    }

    /// 一番上のカードが裏向きなら表にして、そのカードを返す。
    /// 表にしたカードが裏に戻ることはない。
    pub fn reveal_top(&mut self) -> Option<Card> {
        match self.slots.last_mut() {
            Some(slot) if !slot.is_face_up => {
                slot.is_face_up = true;
                Some(slot.card)
            }
            _ => None,
        }
    }
}
