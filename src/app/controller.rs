// src/app/controller.rs
//! The game controller: owns the one `Table` of the current game and the drag state.
//!
//! Every change to the table goes through `attempt_move`, the drag intents, or
//! `draw_from_stock`. Read accessors are enough for the View to draw the board.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::drag_apply_handler::{self, MoveResult};
use crate::app::drag_handler;
use crate::app::state_getter::{self, BoardSnapshot};
use crate::app::stock_handler::{self, StockDraw};
use crate::components::card::Card;
use crate::components::dragging_info::DragPhase;
use crate::components::game_state::Table;
use crate::components::stack::{Column, StackType};
use crate::logic::deck;
use crate::logic::rules::{self, MovePlan, MoveRejection};

#[derive(Debug, Clone)]
pub struct GameController {
    table: Table,
    drag: DragPhase,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// 新しいゲームを配った状態で作る。
    pub fn new() -> Self {
        let mut controller = Self::undealt();
        controller.new_game();
        controller
    }

    /// 固定シードで配った状態で作る (同じシードなら同じ配り)。
    pub fn with_seed(seed: u64) -> Self {
        let mut controller = Self::undealt();
        controller.new_game_with_seed(seed);
        controller
    }

    // 配る直前にしか使わない空の状態
    fn undealt() -> Self {
        Self { table: Table::default(), drag: DragPhase::Idle }
    }

    /// 盤面を捨てて、シャッフルから配り直す。
    pub fn new_game(&mut self) -> &Table {
        self.new_game_with_rng(&mut rand::thread_rng())
    }

    pub fn new_game_with_seed(&mut self, seed: u64) -> &Table {
        info!("Dealing new game with seed {}", seed);
        self.new_game_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn new_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Table {
        let shuffled = deck::shuffled_deck(rng);
        self.table = Table::from_deal(deck::deal(shuffled));
        self.drag = DragPhase::Idle;
        info!("New game dealt: {} cards in stock", self.table.stock_count());
        &self.table
    }

    /// 移動を試す。唯一の「移動」入口。
    ///
    /// `source_index` は移動元ゾーンの中で掴んだカードの位置 (`None` なら一番上)。
    /// ルール上ダメなら盤面は一切変わらず `applied: false` が返る。
    pub fn attempt_move(
        &mut self,
        source: StackType,
        source_index: Option<usize>,
        target: StackType,
    ) -> MoveResult {
        match self.check_move(source, source_index, target) {
            Ok(plan) => drag_apply_handler::apply_move(&mut self.table, &plan),
            Err(reason) => {
                info!("Move rejected: {}", reason);
                MoveResult::REJECTED
            }
        }
    }

    /// 盤面を変えずに、移動できるかどうかと、できない理由を調べる。
    pub fn check_move(
        &self,
        source: StackType,
        source_index: Option<usize>,
        target: StackType,
    ) -> Result<MovePlan, MoveRejection> {
        rules::plan_move(&self.table, source, source_index, Some(target))
    }

    /// 山札クリック。1 枚引くか、山札が空なら捨て札を戻す。
    pub fn draw_from_stock(&mut self) -> StockDraw {
        stock_handler::handle_stock_click(&mut self.table)
    }

    // --- ドラッグ操作 ---

    pub fn start_drag(&mut self, source: StackType, index: Option<usize>) -> bool {
        drag_handler::handle_drag_start(&mut self.drag, &self.table, source, index)
    }

    /// `target` が `None` なら、どのゾーンでもない場所に落とされた。
    pub fn drop_on(&mut self, target: Option<StackType>) -> MoveResult {
        drag_handler::handle_drop(&mut self.drag, &mut self.table, target)
    }

    pub fn cancel_drag(&mut self) {
        drag_handler::handle_drag_cancel(&mut self.drag);
    }

    pub fn end_drag(&mut self) {
        drag_handler::handle_drag_end(&mut self.drag);
    }

    pub fn drag_phase(&self) -> &DragPhase {
        &self.drag
    }

    // --- 読み取り用 ---

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn tableau_column(&self, index: usize) -> Option<&Column> {
        self.table.column(index)
    }

    pub fn stock_count(&self) -> usize {
        self.table.stock_count()
    }

    pub fn waste_count(&self) -> usize {
        self.table.waste_count()
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.table.waste_top()
    }

    pub fn foundation_top(&self, index: usize) -> Option<Card> {
        self.table.foundation_top(index)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        state_getter::build_snapshot(&self.table, &self.drag)
    }
}
