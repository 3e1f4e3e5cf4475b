// src/app/layout_calculator.rs
//! Calculates the drawing position of cards in different stacks.

use crate::components::game_state::Table;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::config::layout::{
    FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET, STOCK_POS_X, STOCK_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET, TABLEAU_Y_OFFSET_FACE_DOWN,
    TABLEAU_Y_OFFSET_FACE_UP, WASTE_POS_X, WASTE_POS_Y,
};

/// スタックタイプとスタック内での順序に基づいて、カードの描画位置を計算します。
///
/// 山札・捨て札・組札はカードを全部同じ位置に重ねる。
/// 場札は下から順に、裏向きなら少しだけ、表向きなら大きめにずらして並べる。
pub fn calculate_card_position(table: &Table, stack_type: StackType, position_in_stack: usize) -> Position {
    match stack_type {
        StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
        StackType::Waste => Position::new(WASTE_POS_X, WASTE_POS_Y),
        StackType::Foundation(index) => {
            Position::new(FOUNDATION_START_X + FOUNDATION_X_OFFSET * index as f32, FOUNDATION_START_Y)
        }
        StackType::Tableau(index) => {
            let x = TABLEAU_START_X + TABLEAU_X_OFFSET * index as f32;
            // 自分より下にあるカードの向きを見て Y をずらす (自分自身は含まない)
            let y = table
                .column(index as usize)
                .map(|column| {
                    column
                        .slots
                        .iter()
                        .take(position_in_stack)
                        .map(|slot| if slot.is_face_up { TABLEAU_Y_OFFSET_FACE_UP } else { TABLEAU_Y_OFFSET_FACE_DOWN })
                        .sum::<f32>()
                })
                .unwrap_or(0.0);
            Position::new(x, TABLEAU_START_Y + y)
        }
    }
}
