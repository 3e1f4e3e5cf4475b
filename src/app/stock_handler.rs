// src/app/stock_handler.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::game_state::Table;
use crate::logic::rules::stock_waste;

/// Result of one click on the Stock pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockDraw {
    /// The card turned over onto the Waste, if any.
    pub drawn_card: Option<Card>,
    /// True when the Waste was turned back into the Stock instead.
    pub recycled: bool,
}

/// Stock click: draw one card if the Stock has any, otherwise recycle the Waste.
/// Both piles empty is a no-op.
pub fn handle_stock_click(table: &mut Table) -> StockDraw {
    let draw = match deal_one_card_from_stock(table) {
        Some(card) => StockDraw { drawn_card: Some(card), recycled: false },
        None => StockDraw { drawn_card: None, recycled: reset_waste_to_stock(table) > 0 },
    };
    table.report_broken_invariants();
    draw
}

/// Deals one card from the Stock pile to the Waste pile (face up).
/// Returns the dealt card, or `None` if the Stock is empty.
pub fn deal_one_card_from_stock(table: &mut Table) -> Option<Card> {
    if !stock_waste::can_deal_from_stock(table.stock.is_empty()) {
        debug!("Stock is empty. Cannot deal.");
        return None;
    }
    let card = table.stock.pop()?;
    table.waste.push(card);
    info!("Dealt {} from Stock to Waste ({} left in Stock).", card, table.stock.len());
    Some(card)
}

/// Resets the Waste pile back to the Stock pile when Stock is empty.
/// Returns how many cards went back.
///
/// The Waste is turned over as a whole: the card drawn first ends up on top of the
/// Stock again, so the next draws come out in the same order as last time.
pub fn reset_waste_to_stock(table: &mut Table) -> usize {
    if !stock_waste::can_reset_stock_from_waste(table.stock.is_empty(), table.waste.is_empty()) {
        debug!("Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return 0;
    }
    let mut moved = 0;
    while let Some(card) = table.waste.pop() {
        table.stock.push(card);
        moved += 1;
    }
    info!("Waste pile reset to Stock: {} cards.", moved);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::deck::{build_ordered_deck, deal};

    fn fresh_table() -> Table {
        Table::from_deal(deal(build_ordered_deck()))
    }

    #[test]
    fn click_draws_the_stock_top() {
        let mut table = fresh_table();
        let expected_top = *table.stock().last().unwrap();
        let draw = handle_stock_click(&mut table);
        assert_eq!(draw, StockDraw { drawn_card: Some(expected_top), recycled: false });
        assert_eq!(table.waste_top(), Some(expected_top));
        assert_eq!(table.stock_count(), 23);
        assert_eq!(table.check_invariants(), Ok(()));
    }

    #[test]
    fn recycle_replays_the_same_draw_order() {
        let mut table = fresh_table();
        let first_pass: Vec<Card> = (0..24).filter_map(|_| handle_stock_click(&mut table).drawn_card).collect();
        assert_eq!(first_pass.len(), 24);
        assert_eq!(table.stock_count(), 0);
        assert_eq!(table.waste_count(), 24);

        let recycle = handle_stock_click(&mut table);
        assert_eq!(recycle, StockDraw { drawn_card: None, recycled: true });
        assert_eq!(table.stock_count(), 24);
        assert_eq!(table.waste_count(), 0);

        let second_pass: Vec<Card> = (0..24).filter_map(|_| handle_stock_click(&mut table).drawn_card).collect();
        assert_eq!(first_pass, second_pass, "リサイクル後の引く順番が変わってる！");
    }

    #[test]
    fn recycle_needs_empty_stock_and_cards_in_waste() {
        let mut table = fresh_table();
        assert_eq!(reset_waste_to_stock(&mut table), 0, "山札が残ってるのにリセットできた");

        table.waste.append(&mut table.stock);
        table.waste.clear();
        // 山札も捨て札も空 → 何も起きない
        assert_eq!(handle_stock_click(&mut table), StockDraw::default());
    }
}
