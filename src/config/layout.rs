// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! View に渡すスナップショットの座標計算だけで使う。ルールには関係ない。

pub const CARD_WIDTH: f32 = 100.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 145.0; // カード画像の高さ
pub const STACK_PADDING: f32 = 10.0; // スタック周囲の余白

// --- 各エリアの開始位置 ---
pub const STOCK_POS_X: f32 = 10.0; // 山札のX座標
pub const STOCK_POS_Y: f32 = 10.0; // 山札のY座標

pub const WASTE_POS_X: f32 = STOCK_POS_X + CARD_WIDTH + STACK_PADDING; // 山札の隣
pub const WASTE_POS_Y: f32 = STOCK_POS_Y;

pub const FOUNDATION_START_X: f32 = 340.0; // 組札 (Foundation) の開始X座標 (場札 4 列目の上)
pub const FOUNDATION_START_Y: f32 = STOCK_POS_Y;
pub const FOUNDATION_X_OFFSET: f32 = CARD_WIDTH + STACK_PADDING; // 組札どうしの間隔

pub const TABLEAU_START_X: f32 = STOCK_POS_X; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = STOCK_POS_Y + CARD_HEIGHT + 30.0; // 場札の開始Y座標
pub const TABLEAU_X_OFFSET: f32 = CARD_WIDTH + STACK_PADDING; // 場札の列間のX方向の間隔
pub const TABLEAU_Y_OFFSET_FACE_DOWN: f32 = 10.0; // 裏向きカードの重なり幅
pub const TABLEAU_Y_OFFSET_FACE_UP: f32 = 25.0; // 表向きカードの重なり幅
