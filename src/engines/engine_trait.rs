//! Engine abstraction layer.
//!
//! Defines the common move-selection surface so different playing strategies
//! can be swapped behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::CellMove;
use crate::search::deadline::TimeSource;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick one move for the side to move, strictly before the caller's turn
    /// clock expires.
    ///
    /// `legal_moves` is the caller-provided move list for `state`; an empty
    /// list returns `None` immediately, with no search attempted. `clock`
    /// answers "how much time is left in this turn" and is the engine's only
    /// view of the deadline.
    fn choose_move(
        &mut self,
        state: &GameState,
        legal_moves: &[CellMove],
        clock: &dyn TimeSource,
    ) -> Option<CellMove>;
}
