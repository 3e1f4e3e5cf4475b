// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod logic;

pub use crate::app::controller::GameController;
pub use crate::app::drag_apply_handler::MoveResult;
pub use crate::app::game_app::GameApp;
pub use crate::app::state_getter::{BoardSnapshot, CardView};
pub use crate::app::stock_handler::StockDraw;
pub use crate::components::{Card, CardColor, Column, DragPhase, Rank, Slot, StackType, Suit, Table};
pub use crate::logic::rules::{MovePlan, MoveRejection};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
