//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use crate::components::stack::Slot;
use super::common::{is_one_rank_higher, is_opposite_color};

/// `candidate` を、一番上が `destination_top` の列に置けるかチェックする。
///
/// - 列が空なら K だけ置ける
/// - 空でなければ、色が違って、ランクが相手よりちょうど 1 つ下のとき置ける
///   (K から下に向かって赤黒交互に積んでいく)
pub fn can_drop_on_column(candidate: Card, destination_top: Option<Card>) -> bool {
    let result = match destination_top {
        None => candidate.rank == Rank::King,
        Some(top) => {
            is_opposite_color(candidate.suit, top.suit) && is_one_rank_higher(top, candidate)
        }
    };
    trace!("[Tableau Rule] {} onto {:?}: {}", candidate, destination_top, result);
    result
}

/// 列から一緒に運ぶカードの束 (carried run) として正しいか。
///
/// 空でなく、全部表向きで、上に行くほど 1 つずつ下がる赤黒交互の並びであること。
pub fn is_valid_carried_run(run: &[Slot]) -> bool {
    if run.is_empty() || run.iter().any(|slot| !slot.is_face_up) {
        return false;
    }
    run.windows(2).all(|pair| {
        let (lower, upper) = (pair[0].card, pair[1].card);
        is_opposite_color(lower.suit, upper.suit) && is_one_rank_higher(lower, upper)
    })
}
