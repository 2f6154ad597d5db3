//! One-ply greedy engine.
//!
//! Forecasts each legal move and keeps the one whose successor scores best
//! under the configured scorer. No lookahead beyond the immediate reply, so
//! it is cheap, deterministic, and a useful baseline opponent.

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::CellMove;
use crate::search::board_scoring::{BoardScorer, MobilityScorer};
use crate::search::deadline::TimeSource;

pub struct GreedyEngine<S: BoardScorer> {
    scorer: S,
}

impl GreedyEngine<MobilityScorer> {
    pub fn new() -> Self {
        Self {
            scorer: MobilityScorer,
        }
    }
}

impl Default for GreedyEngine<MobilityScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> GreedyEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }
}

impl<S: BoardScorer> Engine for GreedyEngine<S> {
    fn name(&self) -> &str {
        "Knight Isolation Greedy"
    }

    fn choose_move(
        &mut self,
        state: &GameState,
        legal_moves: &[CellMove],
        _clock: &dyn TimeSource,
    ) -> Option<CellMove> {
        let player = state.active_player();
        let mut best: Option<(f64, CellMove)> = None;

        for &cell in legal_moves {
            let score = self.scorer.score(&state.forecast_move(cell), player);
            // Strictly-greater keeps the earliest move on ties.
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, cell));
            }
        }

        best.map(|(_, cell)| cell)
    }
}
