// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::controller::GameController;
use crate::app::state_getter;
use crate::components::stack::StackType;

// --- JS 側の View から呼ばれるゲーム本体 ---
//
// ゾーンは JSON で受け取る: `{"Tableau":3}`, `{"Foundation":0}`, `"Waste"`, `"Stock"`
// 結果も JSON 文字列で返すので、JS 側は `JSON.parse` して使ってね。
#[wasm_bindgen]
pub struct GameApp {
    controller: GameController,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        Self { controller: GameController::new() }
    }

    /// 新しいゲームを配って、盤面の JSON を返す。
    pub fn new_game(&mut self) -> Result<String, JsValue> {
        self.controller.new_game();
        self.get_board_state_json()
    }

    /// 同じシードなら同じ配り (「もう一度同じゲーム」用)。
    pub fn new_game_with_seed(&mut self, seed: u64) -> Result<String, JsValue> {
        self.controller.new_game_with_seed(seed);
        self.get_board_state_json()
    }

    /// 現在の盤面 (`BoardSnapshot`) を JSON で返す。
    pub fn get_board_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_board_state_json(self.controller.table(), self.controller.drag_phase())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize board: {}", e)))
    }

    /// ドラッグ開始。`index` を省略すると一番上のカード。掴めないカードなら false。
    pub fn handle_drag_start(&mut self, source_json: &str, index: Option<u32>) -> bool {
        match parse_stack_type(source_json) {
            Some(source) => self.controller.start_drag(source, index.map(|i| i as usize)),
            None => false,
        }
    }

    /// ドロップ。`target_json` が空 / 解釈できない場合は「どこでもない場所」扱い。
    /// `MoveResult` の JSON を返す。
    pub fn handle_drop(&mut self, target_json: Option<String>) -> Result<String, JsValue> {
        let target = target_json.as_deref().and_then(parse_stack_type);
        let result = self.controller.drop_on(target);
        to_json(&result)
    }

    pub fn handle_drag_cancel(&mut self) {
        self.controller.cancel_drag();
    }

    /// ドラッグ終了 (成功でも失敗でも必ず呼ぶ)。隠していたカードが元に戻る。
    pub fn handle_drag_end(&mut self) {
        self.controller.end_drag();
    }

    /// ドラッグを経由しない移動 (ダブルクリックなど)。`MoveResult` の JSON を返す。
    pub fn attempt_move(
        &mut self,
        source_json: &str,
        index: Option<u32>,
        target_json: &str,
    ) -> Result<String, JsValue> {
        let (Some(source), Some(target)) = (parse_stack_type(source_json), parse_stack_type(target_json)) else {
            return to_json(&crate::app::drag_apply_handler::MoveResult::REJECTED);
        };
        let result = self.controller.attempt_move(source, index.map(|i| i as usize), target);
        to_json(&result)
    }

    /// 山札クリック。`StockDraw` の JSON を返す。
    pub fn handle_stock_click(&mut self) -> Result<String, JsValue> {
        let draw = self.controller.draw_from_stock();
        to_json(&draw)
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

/// View から来たゾーン指定の JSON を StackType に変換する。失敗したらログを出して None。
fn parse_stack_type(json: &str) -> Option<StackType> {
    match serde_json::from_str::<StackType>(json) {
        Ok(stack) => Some(stack),
        Err(e) => {
            warn!("GameApp: Failed to deserialize stack type JSON: {}. Input: {}", e, json);
            None
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stack_type_accepts_view_json() {
        assert_eq!(parse_stack_type(r#"{"Tableau":3}"#), Some(StackType::Tableau(3)));
        assert_eq!(parse_stack_type(r#"{"Foundation":0}"#), Some(StackType::Foundation(0)));
        assert_eq!(parse_stack_type(r#""Waste""#), Some(StackType::Waste));
        assert_eq!(parse_stack_type("not json"), None);
        assert_eq!(parse_stack_type(r#""Hand""#), None);
    }
}
