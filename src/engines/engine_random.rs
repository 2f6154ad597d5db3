//! Random-move engine.
//!
//! Selects uniformly from the legal moves and is primarily used for
//! diagnostics, integration tests, and as a weak sparring partner.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::CellMove;
use crate::search::deadline::TimeSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Knight Isolation Random"
    }

    fn choose_move(
        &mut self,
        _state: &GameState,
        legal_moves: &[CellMove],
        _clock: &dyn TimeSource,
    ) -> Option<CellMove> {
        let mut rng = rand::rng();
        legal_moves.choose(&mut rng).copied()
    }
}
