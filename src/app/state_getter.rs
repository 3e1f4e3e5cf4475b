// src/app/state_getter.rs
//! Builds the render projection of the table for the View and converts it to JSON.
//!
//! The View never reads `Table` directly. It redraws from `BoardSnapshot` after every intent.

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::app::layout_calculator;
use crate::components::card::{Card, Rank, Suit};
use crate::components::dragging_info::DragPhase;
use crate::components::game_state::Table;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::logic::rules;

/// View に渡すカード1枚分の情報。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    /// 裏向きのカードは中身を見せない
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suit: Option<Suit>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rank: Option<Rank>,
    pub stack_type: StackType,
    pub position_in_stack: usize,
    pub is_face_up: bool,
    /// このカードを掴んでドラッグを始められるか
    pub draggable: bool,
    /// ドラッグ中で、元の場所には描かないカード
    pub hidden: bool,
    pub position: Position,
}

/// 盤面全体のスナップショット。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cards: Vec<CardView>,
    pub stock_count: usize,
    pub waste_count: usize,
    pub dragging: bool,
}

/// 盤面とドラッグ状態からスナップショットを作る。何も書き換えない。
pub fn build_snapshot(table: &Table, phase: &DragPhase) -> BoardSnapshot {
    let hidden_cards = phase.hidden_cards();
    let mut cards = Vec::with_capacity(table.all_cards().count());

    let mut push = |card: Card, stack_type: StackType, position_in_stack: usize, is_face_up: bool, draggable: bool| {
        cards.push(CardView {
            suit: is_face_up.then_some(card.suit),
            rank: is_face_up.then_some(card.rank),
            stack_type,
            position_in_stack,
            is_face_up,
            draggable,
            hidden: hidden_cards.contains(&card),
            position: layout_calculator::calculate_card_position(table, stack_type, position_in_stack),
        });
    };

    for (i, card) in table.stock().iter().enumerate() {
        push(*card, StackType::Stock, i, false, false);
    }
    let waste_top = table.waste_count().checked_sub(1);
    for (i, card) in table.waste().iter().enumerate() {
        push(*card, StackType::Waste, i, true, Some(i) == waste_top);
    }
    for index in 0..table.foundations.len() {
        let pile = &table.foundations[index];
        for (i, card) in pile.iter().enumerate() {
            push(*card, StackType::Foundation(index as u8), i, true, i + 1 == pile.len());
        }
    }
    for (index, column) in table.tableau().iter().enumerate() {
        for (i, slot) in column.slots.iter().enumerate() {
            let draggable = slot.is_face_up && rules::is_valid_carried_run(&column.slots[i..]);
            push(slot.card, StackType::Tableau(index as u8), i, slot.is_face_up, draggable);
        }
    }

    BoardSnapshot {
        cards,
        stock_count: table.stock_count(),
        waste_count: table.waste_count(),
        dragging: !phase.is_idle(),
    }
}

/// スナップショットを JSON 文字列にする。
pub fn get_board_state_json(table: &Table, phase: &DragPhase) -> Result<String, serde_json::Error> {
    let snapshot = build_snapshot(table, phase);
    match serde_json::to_string(&snapshot) {
        Ok(json) => {
            debug!("Serialized board snapshot with {} cards.", snapshot.cards.len());
            Ok(json)
        }
        Err(e) => {
            error!("Failed to serialize board snapshot: {}", e);
            Err(e)
        }
    }
}
