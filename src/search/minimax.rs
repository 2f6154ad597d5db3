//! Full-width depth-limited minimax search.
//!
//! The reference engine: explores every branch to the depth limit with no
//! pruning. `alpha_beta` must return the same score on the same state; this
//! module is what that equivalence is checked against.

use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::{CellMove, Player};
use crate::search::board_scoring::BoardScorer;
use crate::search::deadline::{DeadlineMonitor, SearchOutcome};

/// Score/move pair produced by one engine invocation.
///
/// `cell` is `None` only at a depth-0 evaluation leaf or when the searched
/// state offered no legal moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub score: f64,
    pub cell: Option<CellMove>,
}

impl ScoredMove {
    #[inline]
    pub const fn leaf(score: f64) -> Self {
        Self { score, cell: None }
    }
}

/// Depth-limited minimax over `state`, scoring leaves from `player`'s
/// perspective.
///
/// `maximizing` says whether this ply chooses for `player` (maximize) or for
/// the adversary (minimize). Ties keep the earliest move in enumeration
/// order. A state with no legal moves yields the initialized bound (`-inf`
/// maximizing, `+inf` minimizing) and no move: an immediate loss for the
/// side to move.
///
/// The deadline monitor is checked on entry of every call; an abort
/// propagates untouched so the driver can fall back to the last completed
/// depth.
pub fn minimax<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
    player: Player,
    depth: u8,
    maximizing: bool,
    monitor: &DeadlineMonitor<'_>,
    nodes: &mut u64,
) -> SearchOutcome<ScoredMove> {
    monitor.check()?;
    *nodes += 1;

    if depth == 0 {
        return Ok(ScoredMove::leaf(scorer.score(state, player)));
    }

    let init = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best = ScoredMove::leaf(init);

    for cell in state.legal_moves() {
        let child = state.forecast_move(cell);
        let reply = minimax(&child, scorer, player, depth - 1, !maximizing, monitor, nodes)?;

        let improved = if maximizing {
            reply.score > best.score
        } else {
            reply.score < best.score
        };
        // The first candidate is always adopted: a state with legal moves
        // must never report the no-move sentinel, even when every reply ties
        // the initial bound.
        if improved || best.cell.is_none() {
            best = ScoredMove {
                score: reply.score,
                cell: Some(cell),
            };
        }
    }

    Ok(best)
}
