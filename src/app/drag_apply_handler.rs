// src/app/drag_apply_handler.rs
//! Handles applying the consequences of a successful drag-and-drop move.

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::game_state::Table;
use crate::components::stack::{Slot, StackType};
use crate::logic::rules::MovePlan;

/// 移動の結果。`applied` が false なら盤面は何も変わっていない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveResult {
    pub applied: bool,
    /// 移動のあとで表にした、移動元の列の新しい一番上のカード
    pub revealed_card: Option<Card>,
}

impl MoveResult {
    pub const REJECTED: MoveResult = MoveResult { applied: false, revealed_card: None };
}

/// 検証済みの移動を盤面に反映する。
///
/// 1. 移動元から束を取り除く
/// 2. 移動先に、順番を保ったまま積む
/// 3. 移動元が場札なら、新しい一番上を必要に応じて表にする
pub fn apply_move(table: &mut Table, plan: &MovePlan) -> MoveResult {
    if table.stack_len(plan.target).is_none() {
        error!("Cannot apply move: no such zone {:?}", plan.target);
        return MoveResult::REJECTED;
    }
    let taken = match take_run(table, plan.source, plan.start_index) {
        Some(taken) => taken,
        None => {
            error!("Cannot apply move: nothing at {:?}[{}]", plan.source, plan.start_index);
            return MoveResult::REJECTED;
        }
    };
    if !taken.iter().map(|slot| slot.card).eq(plan.carried.iter().copied()) {
        // 検証後に盤面が変わっていた。元に戻して何もしない。
        error!("Stale move plan for {:?}[{}], restoring", plan.source, plan.start_index);
        put_run(table, plan.source, taken);
        return MoveResult::REJECTED;
    }

    info!(
        "Moving {} card(s) starting with {} from {:?} to {:?}",
        taken.len(),
        plan.carried[0],
        plan.source,
        plan.target
    );
    let face_up = taken.into_iter().map(|slot| Slot::face_up(slot.card)).collect();
    put_run(table, plan.target, face_up);

    let revealed_card = reveal_underlying_card_if_needed(table, plan.source);
    table.report_broken_invariants();
    MoveResult { applied: true, revealed_card }
}

/// 移動元の列の一番上が裏向きなら表にする。場札以外では何もしない。
pub fn reveal_underlying_card_if_needed(table: &mut Table, source: StackType) -> Option<Card> {
    let StackType::Tableau(index) = source else { return None };
    let revealed = table.tableau.get_mut(index as usize)?.reveal_top();
    if let Some(card) = revealed {
        info!("Revealed {} on Tableau({})", card, index);
    }
    revealed
}

/// `stack` の `start` 番目から上を、向きごと取り除いて返す。
fn take_run(table: &mut Table, stack: StackType, start: usize) -> Option<Vec<Slot>> {
    let pile_len = table.stack_len(stack)?;
    if start >= pile_len {
        return None;
    }
    let slots = match stack {
        StackType::Tableau(i) => table.tableau[i as usize].slots.split_off(start),
        StackType::Foundation(i) => face_up_slots(table.foundations[i as usize].split_off(start)),
        StackType::Waste => face_up_slots(table.waste.split_off(start)),
        StackType::Stock => table.stock.split_off(start).into_iter().map(Slot::face_down).collect(),
    };
    Some(slots)
}

fn face_up_slots(cards: Vec<Card>) -> Vec<Slot> {
    cards.into_iter().map(Slot::face_up).collect()
}

/// `stack` の上に `slots` を順番どおりに積む。場札以外ではカードだけが残る。
fn put_run(table: &mut Table, stack: StackType, slots: Vec<Slot>) {
    let cards = slots.iter().map(|slot| slot.card);
    match stack {
        StackType::Tableau(i) => table.tableau[i as usize].slots.extend(slots.iter().copied()),
        StackType::Foundation(i) => table.foundations[i as usize].extend(cards),
        StackType::Waste => table.waste.extend(cards),
        StackType::Stock => table.stock.extend(cards),
    }
}
