// src/components/position.rs

use serde::{Deserialize, Serialize};

/// 盤面上の描画位置 (x, y) だよ！📍
///
/// ゲームのルールはこの値を一切見ない。View に渡すスナップショットの中で、
/// 「このカードをどこに描けばいいか」を伝えるためだけに使う。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
