// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//!
//! 移動元ゾーン・掴んだ位置・移動先ゾーンから、実際に何枚をどこへ運ぶかを決める。
//! 盤面は読むだけで、書き換えは `app::drag_apply_handler` がやる。

use std::error::Error;
use std::fmt;

use crate::components::card::Card;
use crate::components::game_state::Table;
use crate::components::stack::{Slot, StackType};
use super::{foundation, tableau};
use super::common::get_foundation_suit;

/// 移動が却下された理由。View にエラーとして見せることはなく、ログとテスト用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// そんなゾーンはない (場札 7 列目以降、組札 4 つ目以降など)
    UnknownZone(StackType),
    /// 山札からはドラッグできない
    NotDraggable(StackType),
    /// 掴んだ位置にカードがない
    NoCardAt { stack: StackType, index: usize },
    /// 裏向きのカードは掴めない
    FaceDown { stack: StackType, index: usize },
    /// 捨て札・組札は一番上しか掴めない
    NotTopOfPile { stack: StackType, index: usize },
    /// 表向きでも、正しい並びになっていない束
    BrokenRun { stack: StackType, index: usize },
    /// 移動元と移動先が同じ
    SameZone(StackType),
    /// ドロップ先として受け付けないゾーン (山札・捨て札、または何もないところ)
    UnrecognizedTarget(Option<StackType>),
    /// 組札には 1 枚ずつしか運べない
    MultipleCardsToFoundation { carried: usize },
    /// ルール上置けない
    IllegalPlacement { card: Card, target: StackType },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::UnknownZone(stack) => write!(f, "unknown zone {:?}", stack),
            MoveRejection::NotDraggable(stack) => write!(f, "cards cannot be dragged from {:?}", stack),
            MoveRejection::NoCardAt { stack, index } => {
                write!(f, "no card at index {} of {:?}", index, stack)
            }
            MoveRejection::FaceDown { stack, index } => {
                write!(f, "card at index {} of {:?} is face down", index, stack)
            }
            MoveRejection::NotTopOfPile { stack, index } => {
                write!(f, "index {} is not the top of {:?}", index, stack)
            }
            MoveRejection::BrokenRun { stack, index } => {
                write!(f, "cards from index {} of {:?} do not form a run", index, stack)
            }
            MoveRejection::SameZone(stack) => write!(f, "source and target are both {:?}", stack),
            MoveRejection::UnrecognizedTarget(Some(stack)) => {
                write!(f, "{:?} is not a drop target", stack)
            }
            MoveRejection::UnrecognizedTarget(None) => write!(f, "dropped outside any zone"),
            MoveRejection::MultipleCardsToFoundation { carried } => {
                write!(f, "cannot move {} cards to a foundation at once", carried)
            }
            MoveRejection::IllegalPlacement { card, target } => {
                write!(f, "{} cannot be placed on {:?}", card, target)
            }
        }
    }
}

impl Error for MoveRejection {}

/// 掴んだカード (と、その上に乗っている束)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub stack: StackType,
    /// 移動元ゾーンの中での、掴んだカードの位置
    pub index: usize,
    /// 掴んだカードから一番上までの束。先頭が掴んだカード。
    pub carried: Vec<Slot>,
}

impl DragSource {
    /// 束の先頭 (掴んだカード)。ルール判定の対象になる。
    /// 束が空なら `None`。
    pub fn lead_card(&self) -> Option<Card> {
        self.carried.first().map(|slot| slot.card)
    }
}

/// 検証済みの移動。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub source: StackType,
    pub start_index: usize,
    pub target: StackType,
    pub carried: Vec<Card>,
}

/// 掴める場所かどうかをチェックして、運ぶ束を返す。
///
/// `index` が `None` なら一番上のカードを掴んだとみなす。
/// 場札は表向きの束ならどこからでも、捨て札と組札は一番上だけ。山札は不可。
pub fn resolve_drag_source(
    table: &Table,
    stack: StackType,
    index: Option<usize>,
) -> Result<DragSource, MoveRejection> {
    match stack {
        StackType::Stock => Err(MoveRejection::NotDraggable(stack)),
        StackType::Tableau(column_index) => {
            let column = table
                .column(column_index as usize)
                .ok_or(MoveRejection::UnknownZone(stack))?;
            let index = match index {
                Some(i) => i,
                None => column.len().checked_sub(1).ok_or(MoveRejection::NoCardAt { stack, index: 0 })?,
            };
            let slot = column.slots.get(index).ok_or(MoveRejection::NoCardAt { stack, index })?;
            if !slot.is_face_up {
                return Err(MoveRejection::FaceDown { stack, index });
            }
            let carried = column.slots[index..].to_vec();
            if !tableau::is_valid_carried_run(&carried) {
                return Err(MoveRejection::BrokenRun { stack, index });
            }
            Ok(DragSource { stack, index, carried })
        }
        StackType::Waste | StackType::Foundation(_) => {
            let pile = match stack {
                StackType::Foundation(i) => table.foundation(i as usize).ok_or(MoveRejection::UnknownZone(stack))?,
                _ => table.waste(),
            };
            let top_index = pile.len().checked_sub(1).ok_or(MoveRejection::NoCardAt {
                stack,
                index: index.unwrap_or(0),
            })?;
            let index = index.unwrap_or(top_index);
            if index > top_index {
                return Err(MoveRejection::NoCardAt { stack, index });
            }
            if index != top_index {
                return Err(MoveRejection::NotTopOfPile { stack, index });
            }
            Ok(DragSource { stack, index, carried: vec![Slot::face_up(pile[index])] })
        }
    }
}

/// 掴んだ束を `target` に落とせるかチェックする。
///
/// 移動先が場札なら `can_drop_on_column`、組札なら `can_move_to_foundation` で判定。
/// 移動先の「今の一番上 (または空)」と、束の先頭のカードを比べる。
pub fn check_drop(
    table: &Table,
    source: &DragSource,
    target: Option<StackType>,
) -> Result<MovePlan, MoveRejection> {
    let target = match target {
        Some(target @ (StackType::Tableau(_) | StackType::Foundation(_))) => target,
        other => return Err(MoveRejection::UnrecognizedTarget(other)),
    };
    if target == source.stack {
        return Err(MoveRejection::SameZone(target));
    }

    let card = source
        .lead_card()
        .ok_or(MoveRejection::NoCardAt { stack: source.stack, index: source.index })?;
    let legal = match target {
        StackType::Tableau(i) => {
            let column = table.column(i as usize).ok_or(MoveRejection::UnknownZone(target))?;
            tableau::can_drop_on_column(card, column.top_card())
        }
        StackType::Foundation(i) => {
            let suit = get_foundation_suit(i).ok_or(MoveRejection::UnknownZone(target))?;
            if !foundation::moved_group_is_single_card(&source.carried) {
                return Err(MoveRejection::MultipleCardsToFoundation { carried: source.carried.len() });
            }
            foundation::can_move_to_foundation(card, table.foundation_top(i as usize), suit)
        }
        StackType::Stock | StackType::Waste => false,
    };
    if !legal {
        return Err(MoveRejection::IllegalPlacement { card, target });
    }

    Ok(MovePlan {
        source: source.stack,
        start_index: source.index,
        target,
        carried: source.carried.iter().map(|slot| slot.card).collect(),
    })
}

/// `resolve_drag_source` と `check_drop` をまとめて呼ぶ。
pub fn plan_move(
    table: &Table,
    source: StackType,
    source_index: Option<usize>,
    target: Option<StackType>,
) -> Result<MovePlan, MoveRejection> {
    let drag_source = resolve_drag_source(table, source, source_index)?;
    check_drop(table, &drag_source, target)
}
