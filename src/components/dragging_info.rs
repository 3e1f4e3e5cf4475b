// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::StackType;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DraggingInfo {
    /// 掴んだカードがあったゾーン
    pub source: StackType,
    /// そのゾーンの中での、掴んだカードの位置
    pub source_index: usize,
    /// 一緒に運んでいるカード。先頭が掴んだカード。
    pub carried: Vec<Card>,
}

/// ドラッグ操作の状態。
///
/// `Idle` → `Dragging` → (`Dropped` か `Cancelled`) → ドラッグ終了で `Idle` に戻る。
/// `Idle` 以外のあいだ、運んでいるカードは View 上では隠しておく。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DraggingInfo),
    /// どこかに落とした。`applied` が false なら元の場所に戻っている。
    Dropped {
        info: DraggingInfo,
        target: Option<StackType>,
        applied: bool,
    },
    Cancelled(DraggingInfo),
}

impl DragPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragPhase::Idle)
    }

    /// 今ドラッグに関わっているカード情報 (Idle なら None)
    pub fn info(&self) -> Option<&DraggingInfo> {
        match self {
            DragPhase::Idle => None,
            DragPhase::Dragging(info) | DragPhase::Cancelled(info) => Some(info),
            DragPhase::Dropped { info, .. } => Some(info),
        }
    }

    /// View 上で隠しておくカード
    pub fn hidden_cards(&self) -> &[Card] {
        match self.info() {
            Some(info) => &info.carried,
            None => &[],
        }
    }
}
