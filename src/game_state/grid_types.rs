//! Core identity types for the Knight Isolation board.
//!
//! Players are opaque two-valued tokens; moves are grid coordinates. The
//! "no move available" sentinel is expressed as `Option<CellMove>::None`
//! throughout the crate rather than a reserved coordinate.

use std::fmt;

/// One of the two competing agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The adversary of this player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A destination cell on the board, identified by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMove {
    pub row: u8,
    pub col: u8,
}

impl CellMove {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn cell_move_displays_as_coordinate_pair() {
        assert_eq!(CellMove::new(3, 5).to_string(), "(3, 5)");
    }
}
