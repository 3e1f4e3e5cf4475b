// src/components/mod.rs
//! 盤面を構成するデータ型たち。

pub mod card;
pub mod dragging_info;
pub mod game_state;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use dragging_info::{DragPhase, DraggingInfo};
pub use game_state::Table;
pub use position::Position;
pub use stack::{Column, Slot, StackType};
