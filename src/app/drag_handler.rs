// src/app/drag_handler.rs
//! Handles card dragging logic (start, drop, cancel, end).
//!
//! The View reports typed intents (which zone, which card, where it was dropped);
//! this module keeps the `DragPhase` state machine and asks the rules before
//! anything on the table changes.

use log::{debug, info, warn};

use crate::app::drag_apply_handler::{self, MoveResult};
use crate::components::dragging_info::{DragPhase, DraggingInfo};
use crate::components::game_state::Table;
use crate::components::stack::StackType;
use crate::logic::rules;

/// ドラッグ開始時の処理。
///
/// 掴めるのは場札の表向きのカード (その上の束ごと)、捨て札の一番上、組札の一番上だけ。
/// それ以外は無視して false を返す (状態は `Idle` のまま)。
pub fn handle_drag_start(
    phase: &mut DragPhase,
    table: &Table,
    source: StackType,
    index: Option<usize>,
) -> bool {
    if !phase.is_idle() {
        // 前のドラッグの終了通知が来なかった。新しいドラッグで上書きする。
        warn!("Drag started while previous drag was still {:?}. Resetting.", phase);
        *phase = DragPhase::Idle;
    }

    match rules::resolve_drag_source(table, source, index) {
        Ok(drag_source) => {
            let info = DraggingInfo {
                source: drag_source.stack,
                source_index: drag_source.index,
                carried: drag_source.carried.iter().map(|slot| slot.card).collect(),
            };
            info!("Drag started: {} card(s) from {:?}[{}]", info.carried.len(), info.source, info.source_index);
            *phase = DragPhase::Dragging(info);
            true
        }
        Err(reason) => {
            debug!("Ignoring drag start: {}", reason);
            false
        }
    }
}

/// ドロップ時の処理。
///
/// `target` が `None` なのは、どのゾーンでもない場所に落とされたとき。
/// ルール上 OK なら盤面を更新し、ダメなら何も変えない (カードは元の場所に戻る)。
/// どちらの場合も、ドラッグ終了 (`handle_drag_end`) までは `Dropped` のまま。
pub fn handle_drop(phase: &mut DragPhase, table: &mut Table, target: Option<StackType>) -> MoveResult {
    let info = match std::mem::take(phase) {
        DragPhase::Dragging(info) => info,
        other => {
            debug!("Drop ignored: no drag in progress ({:?})", other);
            *phase = other;
            return MoveResult::REJECTED;
        }
    };

    let result = match rules::plan_move(table, info.source, Some(info.source_index), target) {
        Ok(plan) => drag_apply_handler::apply_move(table, &plan),
        Err(reason) => {
            info!("Move rejected: {}", reason);
            MoveResult::REJECTED
        }
    };

    *phase = DragPhase::Dropped { info, target, applied: result.applied };
    result
}

/// ドラッグを取り消す (ドロップせずに離した、Esc など)。盤面は変わらない。
pub fn handle_drag_cancel(phase: &mut DragPhase) {
    match std::mem::take(phase) {
        DragPhase::Dragging(info) => {
            debug!("Drag cancelled for {:?}[{}]", info.source, info.source_index);
            *phase = DragPhase::Cancelled(info);
        }
        other => *phase = other,
    }
}

/// ドラッグ終了時の処理。結果に関係なく `Idle` に戻す (隠していたカードがまた見える)。
pub fn handle_drag_end(phase: &mut DragPhase) {
    if let DragPhase::Dragging(info) = &*phase {
        // ドロップされずに終わった
        debug!("Drag ended without drop for {:?}[{}]", info.source, info.source_index);
    }
    *phase = DragPhase::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::components::stack::{Column, Slot};
    use crate::logic::deck::build_ordered_deck;

    /// 列 0: [J♦(裏), 9♠] / 列 1: [10♦] / 捨て札: [8♥] / 残りは山札
    fn small_table() -> Table {
        let jack_diamonds = Card::new(Suit::Diamonds, Rank::Jack);
        let nine_spades = Card::new(Suit::Spades, Rank::Nine);
        let ten_diamonds = Card::new(Suit::Diamonds, Rank::Ten);
        let eight_hearts = Card::new(Suit::Hearts, Rank::Eight);
        let mut tableau: [Column; 7] = Default::default();
        tableau[0].slots = vec![Slot::face_down(jack_diamonds), Slot::face_up(nine_spades)];
        tableau[1].slots = vec![Slot::face_up(ten_diamonds)];
        let placed = [jack_diamonds, nine_spades, ten_diamonds, eight_hearts];
        let stock = build_ordered_deck().into_iter().filter(|c| !placed.contains(c)).collect();
        Table::from_parts(tableau, stock, vec![eight_hearts], Default::default())
    }

    #[test]
    fn full_drag_cycle_applies_legal_move() {
        let mut table = small_table();
        let mut phase = DragPhase::Idle;

        assert!(handle_drag_start(&mut phase, &table, StackType::Tableau(0), None));
        assert_eq!(phase.hidden_cards(), &[Card::new(Suit::Spades, Rank::Nine)]);

        let result = handle_drop(&mut phase, &mut table, Some(StackType::Tableau(1)));
        assert!(result.applied);
        assert_eq!(result.revealed_card, Some(Card::new(Suit::Diamonds, Rank::Jack)));
        assert!(matches!(phase, DragPhase::Dropped { applied: true, .. }));
        // ドラッグ終了までは隠したまま
        assert_eq!(phase.hidden_cards().len(), 1);

        handle_drag_end(&mut phase);
        assert!(phase.is_idle());
        assert!(phase.hidden_cards().is_empty());
        assert_eq!(table.check_invariants(), Ok(()));
    }

    #[test]
    fn illegal_drop_changes_nothing() {
        let mut table = small_table();
        let before = table.clone();
        let mut phase = DragPhase::Idle;

        // 8♥ を 10♦ へ: ランクも色もダメ
        assert!(handle_drag_start(&mut phase, &table, StackType::Waste, None));
        let result = handle_drop(&mut phase, &mut table, Some(StackType::Tableau(1)));
        assert_eq!(result, MoveResult::REJECTED);
        assert_eq!(table, before);
        assert!(matches!(phase, DragPhase::Dropped { applied: false, .. }));

        handle_drag_end(&mut phase);
        assert!(phase.is_idle());
    }

    #[test]
    fn drop_outside_any_zone_is_a_no_op() {
        let mut table = small_table();
        let before = table.clone();
        let mut phase = DragPhase::Idle;
        assert!(handle_drag_start(&mut phase, &table, StackType::Waste, None));
        assert_eq!(handle_drop(&mut phase, &mut table, None), MoveResult::REJECTED);
        assert_eq!(table, before);
    }

    #[test]
    fn face_down_and_stock_cannot_be_grabbed() {
        let table = small_table();
        let mut phase = DragPhase::Idle;
        assert!(!handle_drag_start(&mut phase, &table, StackType::Tableau(0), Some(0)));
        assert!(!handle_drag_start(&mut phase, &table, StackType::Stock, None));
        assert!(!handle_drag_start(&mut phase, &table, StackType::Foundation(0), None));
        assert!(phase.is_idle());
    }

    #[test]
    fn drop_without_drag_is_ignored() {
        let mut table = small_table();
        let before = table.clone();
        let mut phase = DragPhase::Idle;
        assert_eq!(handle_drop(&mut phase, &mut table, Some(StackType::Tableau(1))), MoveResult::REJECTED);
        assert!(phase.is_idle());
        assert_eq!(table, before);
    }

    #[test]
    fn cancel_keeps_cards_hidden_until_drag_end() {
        let table = small_table();
        let mut phase = DragPhase::Idle;
        assert!(handle_drag_start(&mut phase, &table, StackType::Waste, None));
        handle_drag_cancel(&mut phase);
        assert!(matches!(phase, DragPhase::Cancelled(_)));
        assert_eq!(phase.hidden_cards().len(), 1);
        handle_drag_end(&mut phase);
        assert!(phase.is_idle());
    }

    #[test]
    fn new_drag_replaces_a_stuck_one() {
        let table = small_table();
        let mut phase = DragPhase::Idle;
        assert!(handle_drag_start(&mut phase, &table, StackType::Waste, None));
        assert!(handle_drag_start(&mut phase, &table, StackType::Tableau(1), None));
        assert_eq!(phase.info().map(|info| info.source), Some(StackType::Tableau(1)));
    }
}
