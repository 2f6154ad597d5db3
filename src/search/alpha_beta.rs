//! Depth-limited minimax with alpha-beta pruning.
//!
//! Same contract and tie-break policy as `minimax`, plus the two running
//! bounds: `alpha` (best score the maximizer already has elsewhere) and
//! `beta` (best the minimizer has). Subtrees that cannot change the outcome
//! are cut, so the returned score matches plain minimax while strictly fewer
//! nodes are visited on any tree with a pruning opportunity.

use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::Player;
use crate::search::board_scoring::BoardScorer;
use crate::search::deadline::{DeadlineMonitor, SearchOutcome};
use crate::search::minimax::ScoredMove;

/// Top-level entry: runs `alpha_beta` with the full `(-inf, +inf)` window.
pub fn alpha_beta_root<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
    player: Player,
    depth: u8,
    monitor: &DeadlineMonitor<'_>,
    nodes: &mut u64,
) -> SearchOutcome<ScoredMove> {
    alpha_beta(
        state,
        scorer,
        player,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        monitor,
        nodes,
    )
}

/// Alpha-beta search over `state`, scoring leaves from `player`'s
/// perspective.
///
/// The window travels by value down each call chain; sibling subtrees never
/// share bounds. Maximizing plies prune once a child's score reaches `beta`
/// (the minimizer would never allow this line), minimizing plies prune at
/// `alpha`. Deadline handling is identical to `minimax`: checked on every
/// entry, abort propagated untouched.
pub fn alpha_beta<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
    player: Player,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
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
        let reply = alpha_beta(
            &child,
            scorer,
            player,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            monitor,
            nodes,
        )?;

        let improved = if maximizing {
            reply.score > best.score
        } else {
            reply.score < best.score
        };
        if improved || best.cell.is_none() {
            best = ScoredMove {
                score: reply.score,
                cell: Some(cell),
            };
        }

        if maximizing {
            if reply.score >= beta {
                return Ok(best);
            }
            alpha = alpha.max(reply.score);
        } else {
            if reply.score <= alpha {
                return Ok(best);
            }
            beta = beta.min(reply.score);
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::grid_types::CellMove;
    use crate::search::board_scoring::MobilityScorer;
    use crate::search::deadline::{UnlimitedClock, DEFAULT_TIMER_THRESHOLD};
    use crate::search::minimax::minimax;
    use rand::rngs::StdRng;
    use rand::{Rng, RngExt, SeedableRng};

    /// Random mid-game position: both players placed, roughly a third of the
    /// remaining cells already burned.
    fn random_state(rng: &mut StdRng, width: u8, height: u8) -> GameState {
        let mut state = GameState::with_dimensions(width, height);

        let one = CellMove::new(rng.random_range(0..height), rng.random_range(0..width));
        state = state.forecast_move(one);
        let blanks = state.blank_cells();
        let two = blanks[rng.random_range(0..blanks.len())];
        state = state.forecast_move(two);

        for row in 0..height {
            for col in 0..width {
                let cell = CellMove::new(row, col);
                if state.is_blank(cell) && rng.random_bool(0.3) {
                    let idx = usize::from(row) * usize::from(width) + usize::from(col);
                    state.blocked[idx] = true;
                }
            }
        }
        state.move_count = 6;
        state
    }

    #[test]
    fn scores_match_minimax_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(42);
        let clock = UnlimitedClock;
        let monitor = DeadlineMonitor::new(&clock, DEFAULT_TIMER_THRESHOLD);

        for round in 0..25 {
            let state = random_state(&mut rng, 5, 5);
            for depth in 1..=3 {
                let mut mm_nodes = 0;
                let mm = minimax(
                    &state,
                    &MobilityScorer,
                    Player::One,
                    depth,
                    true,
                    &monitor,
                    &mut mm_nodes,
                )
                .expect("no deadline configured");

                let mut ab_nodes = 0;
                let ab = alpha_beta_root(
                    &state,
                    &MobilityScorer,
                    Player::One,
                    depth,
                    &monitor,
                    &mut ab_nodes,
                )
                .expect("no deadline configured");

                assert_eq!(
                    ab.score, mm.score,
                    "score divergence at round {round} depth {depth}"
                );
                assert!(
                    ab_nodes <= mm_nodes,
                    "pruning visited more nodes ({ab_nodes} > {mm_nodes}) at round {round} depth {depth}"
                );
            }
        }
    }

    #[test]
    fn pruning_strictly_reduces_nodes_on_a_wide_midgame_tree() {
        let mut state = GameState::new();
        state = state.forecast_move(CellMove::new(3, 3));
        state = state.forecast_move(CellMove::new(1, 1));
        let clock = UnlimitedClock;
        let monitor = DeadlineMonitor::new(&clock, DEFAULT_TIMER_THRESHOLD);

        let mut mm_nodes = 0;
        minimax(
            &state,
            &MobilityScorer,
            Player::One,
            3,
            true,
            &monitor,
            &mut mm_nodes,
        )
        .expect("no deadline configured");

        let mut ab_nodes = 0;
        alpha_beta_root(&state, &MobilityScorer, Player::One, 3, &monitor, &mut ab_nodes)
            .expect("no deadline configured");

        assert!(
            ab_nodes < mm_nodes,
            "expected a real cut on a wide tree: {ab_nodes} vs {mm_nodes}"
        );
    }

    #[test]
    fn root_wrapper_matches_an_explicit_infinite_window() {
        let mut state = GameState::new();
        state = state.forecast_move(CellMove::new(2, 4));
        state = state.forecast_move(CellMove::new(5, 1));
        let clock = UnlimitedClock;
        let monitor = DeadlineMonitor::new(&clock, DEFAULT_TIMER_THRESHOLD);

        let mut root_nodes = 0;
        let via_root = alpha_beta_root(
            &state,
            &MobilityScorer,
            Player::One,
            2,
            &monitor,
            &mut root_nodes,
        )
        .expect("no deadline configured");

        let mut raw_nodes = 0;
        let via_raw = alpha_beta(
            &state,
            &MobilityScorer,
            Player::One,
            2,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            &monitor,
            &mut raw_nodes,
        )
        .expect("no deadline configured");

        assert_eq!(via_root, via_raw);
        assert_eq!(root_nodes, raw_nodes);
    }
}
