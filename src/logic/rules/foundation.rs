//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::Slot;
use super::common::is_one_rank_higher;

/// `candidate` を、スートが `foundation_suit` で一番上が `foundation_top` の組札に置けるかチェックする。
///
/// スートが一致していて、組札が空なら A、空でなければ一番上のちょうど 1 つ上のランクだけ置ける。
pub fn can_move_to_foundation(
    candidate: Card,
    foundation_top: Option<Card>,
    foundation_suit: Suit,
) -> bool {
    if candidate.suit != foundation_suit {
        trace!("[Foundation Rule] {} does not match {:?}", candidate, foundation_suit);
        return false;
    }
    let result = match foundation_top {
        None => candidate.rank == Rank::Ace,
        Some(top) => is_one_rank_higher(candidate, top),
    };
    trace!("[Foundation Rule] {} onto {:?}: {}", candidate, foundation_top, result);
    result
}

/// 組札に運べるのは 1 枚だけ。掴んだカードの上に何も乗っていないこと。
pub fn moved_group_is_single_card(moved: &[Slot]) -> bool {
    moved.len() == 1
}
