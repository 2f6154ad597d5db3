//! Terminal-oriented board renderer.
//!
//! Creates a human-readable grid view from a `GameState` for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::{CellMove, Player};

/// Render the board to a text grid: `1`/`2` for the players' current seats,
/// `x` for burned cells, `·` for blank ones.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  ");
    for col in 0..state.width {
        out.push_str(&format!("{col} "));
    }
    out.push('\n');

    for row in 0..state.height {
        out.push_str(&format!("{row} "));
        for col in 0..state.width {
            let cell = CellMove::new(row, col);
            let glyph = if state.player_location(Player::One) == Some(cell) {
                '1'
            } else if state.player_location(Player::Two) == Some(cell) {
                '2'
            } else if state.is_blank(cell) {
                '·'
            } else {
                'x'
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }

    out
}
