// src/components/game_state.rs

use itertools::Itertools;
use log::error;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, ALL_SUITS};
use crate::components::stack::{Column, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COLUMNS};
use crate::logic::deck::Deal;

/// ゲーム1回分の盤面 (Table) 全体だよ！
///
/// 場札 7 列、山札 (Stock)、捨て札 (Waste)、組札 4 つを持つ。
/// 52 枚のカードは必ずこのどこか1か所にだけ存在する。
///
/// 中身を書き換えるのは `app` の各ハンドラだけ。外からは読み取り用の
/// アクセサを使ってね。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub(crate) tableau: [Column; TABLEAU_COLUMNS],
    /// 最後の要素が山札の一番上。全部裏向き。
    pub(crate) stock: Vec<Card>,
    /// 最後の要素が捨て札の一番上。全部表向き。
    pub(crate) waste: Vec<Card>,
    /// `foundations[i]` は `ALL_SUITS[i]` のスート専用。A から昇順。
    pub(crate) foundations: [Vec<Card>; FOUNDATION_COUNT],
}

impl Table {
    /// 配り終わった直後の盤面を作る。
    pub fn from_deal(deal: Deal) -> Self {
        Self {
            tableau: deal.tableau,
            stock: deal.stock,
            waste: Vec::new(),
            foundations: Default::default(),
        }
    }

    /// 各ゾーンの中身を直接指定して盤面を組み立てる。
    /// 途中局面の再現用。整合性は `check_invariants` で確かめること。
    pub fn from_parts(
        tableau: [Column; TABLEAU_COLUMNS],
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: [Vec<Card>; FOUNDATION_COUNT],
    ) -> Self {
        Self { tableau, stock, waste, foundations }
    }

    pub fn tableau(&self) -> &[Column; TABLEAU_COLUMNS] {
        &self.tableau
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.tableau.get(index)
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn foundation(&self, index: usize) -> Option<&[Card]> {
        self.foundations.get(index).map(Vec::as_slice)
    }

    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    pub fn waste_count(&self) -> usize {
        self.waste.len()
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    pub fn foundation_top(&self, index: usize) -> Option<Card> {
        self.foundations.get(index).and_then(|pile| pile.last().copied())
    }

    /// 指定ゾーンのカード枚数。存在しないゾーンなら `None`。
    pub fn stack_len(&self, stack: StackType) -> Option<usize> {
        match stack {
            StackType::Tableau(index) => self.column(index as usize).map(Column::len),
            StackType::Foundation(index) => self.foundation(index as usize).map(<[Card]>::len),
            StackType::Stock => Some(self.stock.len()),
            StackType::Waste => Some(self.waste.len()),
        }
    }

    /// 盤面上の全カード (場所は問わない) を列挙する。
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.tableau
            .iter()
            .flat_map(|column| column.slots.iter().map(|slot| slot.card))
            .chain(self.stock.iter().copied())
            .chain(self.waste.iter().copied())
            .chain(self.foundations.iter().flatten().copied())
    }

    /// 盤面の不変条件をまとめてチェックする。
    ///
    /// - 52 枚が重複も欠けもなく、どこか1か所に入っている
    /// - 空でない列は一番上が表向きで、表向きの部分は上側に連続している
    /// - 組札は自分のスートだけで、A から隙間なく昇順
    ///
    /// 壊れていたら最初に見つかった問題を説明する文字列を返す。
    pub fn check_invariants(&self) -> Result<(), String> {
        let total = self.all_cards().count();
        if total != DECK_SIZE {
            return Err(format!("expected {} cards on the table, found {}", DECK_SIZE, total));
        }
        if let Some(card) = self.all_cards().duplicates().next() {
            return Err(format!("card {} appears more than once", card));
        }

        for (index, column) in self.tableau.iter().enumerate() {
            let Some(top) = column.top() else { continue };
            if !top.is_face_up {
                return Err(format!("column {} has a face-down top card", index));
            }
            let start = column.face_up_start();
            if column.slots[start..].iter().any(|slot| !slot.is_face_up) {
                return Err(format!("column {} has a face-down card above a face-up one", index));
            }
        }

        for (index, (pile, suit)) in self.foundations.iter().zip(ALL_SUITS).enumerate() {
            for (position, card) in pile.iter().enumerate() {
                if card.suit != suit || card.rank.index() as usize != position {
                    return Err(format!(
                        "foundation {} ({:?}) holds {} at position {}",
                        index, suit, card, position
                    ));
                }
            }
        }
        Ok(())
    }

    /// 不変条件が壊れていたら `error!` で報告する。壊れていなければ false。
    pub(crate) fn report_broken_invariants(&self) -> bool {
        match self.check_invariants() {
            Ok(()) => false,
            Err(problem) => {
                error!("Table invariant broken: {}", problem);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::stack::Slot;
    use crate::logic::deck::{build_ordered_deck, deal};

    fn fresh_table() -> Table {
        Table::from_deal(deal(build_ordered_deck()))
    }

    #[test]
    fn fresh_deal_satisfies_invariants() {
        let table = fresh_table();
        assert_eq!(table.check_invariants(), Ok(()));
        assert_eq!(table.stock_count(), 24);
        assert_eq!(table.waste_count(), 0);
        assert!(table.waste_top().is_none());
        assert!((0..FOUNDATION_COUNT).all(|i| table.foundation_top(i).is_none()));
    }

    #[test]
    fn duplicate_card_is_reported() {
        let mut table = fresh_table();
        let stolen = table.stock.pop().unwrap();
        let copy = table.stock[0];
        table.waste.push(copy);
        let err = table.check_invariants().unwrap_err();
        assert!(err.contains("more than once"), "想定外のエラー: {} ({})", err, stolen);
    }

    #[test]
    fn missing_card_is_reported() {
        let mut table = fresh_table();
        table.stock.pop();
        assert!(table.check_invariants().is_err());
    }

    #[test]
    fn face_down_top_is_reported() {
        let mut table = fresh_table();
        table.tableau[3].slots.last_mut().unwrap().is_face_up = false;
        let err = table.check_invariants().unwrap_err();
        assert!(err.contains("column 3"), "{}", err);
    }

    #[test]
    fn foundation_gap_is_reported() {
        let mut table = fresh_table();
        // 山札から 2♥ を探して、A♥ なしで組札 0 (Hearts) に置いてみる
        let two_hearts = Card::new(Suit::Hearts, Rank::Two);
        if let Some(pos) = table.stock.iter().position(|c| *c == two_hearts) {
            table.stock.remove(pos);
        } else {
            for column in table.tableau.iter_mut() {
                column.slots.retain(|slot| slot.card != two_hearts);
                if let Some(top) = column.slots.last_mut() {
                    *top = Slot::face_up(top.card);
                }
            }
        }
        table.foundations[0].push(two_hearts);
        let err = table.check_invariants().unwrap_err();
        assert!(err.contains("foundation 0"), "{}", err);
    }

    #[test]
    fn broken_table_is_reported() {
        assert!(!fresh_table().report_broken_invariants());
        let mut table = fresh_table();
        table.stock.pop();
        assert!(table.report_broken_invariants());
    }

    #[test]
    fn stack_len_reports_each_zone() {
        let table = fresh_table();
        assert_eq!(table.stack_len(StackType::Tableau(6)), Some(7));
        assert_eq!(table.stack_len(StackType::Stock), Some(24));
        assert_eq!(table.stack_len(StackType::Waste), Some(0));
        assert_eq!(table.stack_len(StackType::Foundation(3)), Some(0));
        assert_eq!(table.stack_len(StackType::Tableau(7)), None);
        assert_eq!(table.stack_len(StackType::Foundation(4)), None);
    }
}
