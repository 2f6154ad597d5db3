//! Tree-search engine: the crate's main player.
//!
//! Wires the deadline monitor, the configured search method, and optional
//! iterative deepening into the `Engine` move-selection surface. This is the
//! seam where a deadline abort stops being an error: iterative runs fall
//! back to the last completed depth (or the first legal move if not even
//! depth 1 finished), while fixed-depth runs report a forced forfeit.

use std::time::Duration;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::CellMove;
use crate::search::board_scoring::{BoardScorer, PhaseBlendedScorer};
use crate::search::deadline::{DeadlineMonitor, TimeSource, DEFAULT_TIMER_THRESHOLD};
use crate::search::iterative_deepening::{
    iterative_deepening_search, search_at_depth, SearchConfig, SearchMethod,
};

const DEFAULT_FIXED_DEPTH: u8 = 3;

pub struct MinimaxEngine<S: BoardScorer> {
    scorer: S,
    method: SearchMethod,
    iterative: bool,
    search_depth: u8,
    timer_threshold: Duration,
}

impl MinimaxEngine<PhaseBlendedScorer> {
    /// Iterative-deepening alpha-beta with the default scorer.
    pub fn new() -> Self {
        Self::with_scorer(PhaseBlendedScorer)
    }
}

impl Default for MinimaxEngine<PhaseBlendedScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            method: SearchMethod::AlphaBeta,
            iterative: true,
            search_depth: DEFAULT_FIXED_DEPTH,
            timer_threshold: DEFAULT_TIMER_THRESHOLD,
        }
    }

    /// Iterative deepening with an explicit method.
    pub fn iterative(scorer: S, method: SearchMethod) -> Self {
        Self {
            method,
            ..Self::with_scorer(scorer)
        }
    }

    /// Single search at `depth`, no deepening. An abort before that one
    /// search completes leaves nothing to fall back to.
    pub fn fixed_depth(scorer: S, method: SearchMethod, depth: u8) -> Self {
        Self {
            method,
            iterative: false,
            search_depth: depth,
            ..Self::with_scorer(scorer)
        }
    }

    /// Slack reserved for unwinding and returning before the turn clock
    /// actually expires. Must match the unit of the injected clock.
    pub fn set_timer_threshold(&mut self, threshold: Duration) {
        self.timer_threshold = threshold;
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        match self.method {
            SearchMethod::Minimax => "Knight Isolation Minimax",
            SearchMethod::AlphaBeta => "Knight Isolation AlphaBeta",
        }
    }

    fn choose_move(
        &mut self,
        state: &GameState,
        legal_moves: &[CellMove],
        clock: &dyn TimeSource,
    ) -> Option<CellMove> {
        if legal_moves.is_empty() {
            return None;
        }

        let monitor = DeadlineMonitor::new(clock, self.timer_threshold);
        let player = state.active_player();

        if self.iterative {
            let config = SearchConfig {
                method: self.method,
                max_depth: None,
            };
            let result = iterative_deepening_search(state, &self.scorer, player, config, &monitor);
            // If not even depth 1 completed there is no searched answer, but
            // legal moves exist: answer with the first rather than forfeit.
            result.best_move.or_else(|| legal_moves.first().copied())
        } else {
            let mut nodes = 0u64;
            match search_at_depth(
                self.method,
                state,
                &self.scorer,
                player,
                self.search_depth,
                &monitor,
                &mut nodes,
            ) {
                Ok(scored) => scored.cell.or_else(|| legal_moves.first().copied()),
                // Fixed depth has no shallower completed result; an abort
                // here is a forced forfeit and is reported as such.
                Err(_) => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::grid_types::Player;
    use crate::search::deadline::{CountdownClock, UnlimitedClock};

    /// Scorer that fails the test if the search ever consults it.
    struct UnreachableScorer;

    impl BoardScorer for UnreachableScorer {
        fn score(&self, _state: &GameState, _player: Player) -> f64 {
            panic!("scorer must not be consulted when no legal moves exist");
        }
    }

    fn midgame_state() -> GameState {
        let mut state = GameState::with_dimensions(4, 4);
        state = state.forecast_move(CellMove::new(1, 1));
        state.forecast_move(CellMove::new(2, 3))
    }

    #[test]
    fn empty_move_list_short_circuits_without_searching() {
        let state = GameState::new();
        let mut engine = MinimaxEngine::with_scorer(UnreachableScorer);
        let clock = CountdownClock::new(1_000, 1);

        assert_eq!(engine.choose_move(&state, &[], &clock), None);
        assert_eq!(clock.queries(), 0, "no search means no clock traffic");
    }

    #[test]
    fn iterative_engine_returns_a_legal_move() {
        let state = midgame_state();
        let legal = state.legal_moves();
        // Generous but finite fake clock; the driver stops on its own once
        // the small board's outcome is proven.
        let clock = CountdownClock::new(1_000_000, 1);
        let mut engine = MinimaxEngine::new();

        let chosen = engine
            .choose_move(&state, &legal, &clock)
            .expect("legal moves exist");
        assert!(legal.contains(&chosen));
    }

    #[test]
    fn exhausted_clock_still_yields_a_usable_move_when_iterating() {
        let state = midgame_state();
        let legal = state.legal_moves();
        // Already below the safety threshold: depth 1 aborts instantly.
        let clock = CountdownClock::new(0, 0);
        let mut engine = MinimaxEngine::iterative(PhaseBlendedScorer, SearchMethod::Minimax);

        let chosen = engine.choose_move(&state, &legal, &clock);
        assert_eq!(
            chosen,
            legal.first().copied(),
            "with no completed depth the first legal move is the answer"
        );
    }

    #[test]
    fn exhausted_clock_forfeits_a_fixed_depth_search() {
        let state = midgame_state();
        let legal = state.legal_moves();
        let clock = CountdownClock::new(0, 0);
        let mut engine =
            MinimaxEngine::fixed_depth(PhaseBlendedScorer, SearchMethod::AlphaBeta, 3);

        assert_eq!(engine.choose_move(&state, &legal, &clock), None);
    }

    #[test]
    fn fixed_depth_engine_matches_its_configured_method() {
        let state = midgame_state();
        let legal = state.legal_moves();
        let clock = UnlimitedClock;

        let mut mm = MinimaxEngine::fixed_depth(PhaseBlendedScorer, SearchMethod::Minimax, 2);
        let mut ab = MinimaxEngine::fixed_depth(PhaseBlendedScorer, SearchMethod::AlphaBeta, 2);

        let mm_move = mm.choose_move(&state, &legal, &clock);
        let ab_move = ab.choose_move(&state, &legal, &clock);
        assert!(mm_move.is_some());
        // Same depth, same scorer: the pruned search agrees on the score and
        // here (no equal-scoring earlier sibling is pruned into) the move.
        assert_eq!(mm_move, ab_move);
    }
}
