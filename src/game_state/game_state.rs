//! Core board state representation for Knight Isolation.
//!
//! `GameState` is the model the search tree is built from. It stores the
//! blocked-cell grid, both player locations, and the side to move. States are
//! immutable from the search's point of view: `forecast_move` returns a new
//! state and never touches the parent, so sibling branches stay independent.

use crate::game_state::grid_types::{CellMove, Player};

pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;

/// Knight jump offsets, in the fixed order legal moves are enumerated.
/// Search tie-breaking depends on this order being stable.
const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Snapshot of one Knight Isolation position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Board geometry ---
    pub width: u8,
    pub height: u8,

    // --- Occupancy ---
    // Row-major; true once any player has ever occupied the cell. Cells are
    // never unblocked.
    pub blocked: Vec<bool>,

    // --- Player positions and turn ---
    // `None` until the player's opening placement ply.
    pub locations: [Option<CellMove>; 2],
    pub side_to_move: Player,

    // --- Move counter ---
    pub move_count: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_dimensions(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl GameState {
    /// Standard 7x7 board with both players unplaced and player one to move.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensions(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; usize::from(width) * usize::from(height)],
            locations: [None, None],
            side_to_move: Player::One,
            move_count: 0,
        }
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub fn player_location(&self, player: Player) -> Option<CellMove> {
        self.locations[player.index()]
    }

    #[inline]
    fn cell_index(&self, cell: CellMove) -> usize {
        usize::from(cell.row) * usize::from(self.width) + usize::from(cell.col)
    }

    #[inline]
    pub fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < i16::from(self.height) && col < i16::from(self.width)
    }

    /// Whether the cell has never been occupied by either player.
    #[inline]
    pub fn is_blank(&self, cell: CellMove) -> bool {
        !self.blocked[self.cell_index(cell)]
    }

    /// All never-occupied cells in row-major order.
    pub fn blank_cells(&self) -> Vec<CellMove> {
        let mut blanks = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = CellMove::new(row, col);
                if self.is_blank(cell) {
                    blanks.push(cell);
                }
            }
        }
        blanks
    }

    /// Legal moves for the side to move, in deterministic enumeration order.
    #[inline]
    pub fn legal_moves(&self) -> Vec<CellMove> {
        self.legal_moves_for(self.side_to_move)
    }

    /// Legal moves for `player`, regardless of whose turn it is.
    ///
    /// Before the player's opening placement any blank cell is legal
    /// (row-major order); afterwards the player jumps like a chess knight,
    /// in the fixed `KNIGHT_DIRECTIONS` order.
    pub fn legal_moves_for(&self, player: Player) -> Vec<CellMove> {
        let Some(origin) = self.locations[player.index()] else {
            return self.blank_cells();
        };

        let mut moves = Vec::with_capacity(KNIGHT_DIRECTIONS.len());
        for (dr, dc) in KNIGHT_DIRECTIONS {
            let row = i16::from(origin.row) + i16::from(dr);
            let col = i16::from(origin.col) + i16::from(dc);
            if !self.in_bounds(row, col) {
                continue;
            }
            let cell = CellMove::new(row as u8, col as u8);
            if self.is_blank(cell) {
                moves.push(cell);
            }
        }
        moves
    }

    #[inline]
    pub fn is_legal_move(&self, cell: CellMove) -> bool {
        self.legal_moves().contains(&cell)
    }

    /// Pure move application: a new state with `cell` occupied by the side to
    /// move, the cell permanently blocked, and the turn passed.
    ///
    /// `cell` must come from `legal_moves()`; the parent state is left intact
    /// and remains valid for exploring sibling moves.
    pub fn forecast_move(&self, cell: CellMove) -> GameState {
        debug_assert!(self.is_legal_move(cell), "forecast of illegal move {cell}");

        let mut next = self.clone();
        let idx = next.cell_index(cell);
        next.blocked[idx] = true;
        next.locations[next.side_to_move.index()] = Some(cell);
        next.side_to_move = next.side_to_move.opponent();
        next.move_count += 1;
        next
    }

    /// `player` has lost: it is their turn and they have nowhere to go.
    pub fn is_loser(&self, player: Player) -> bool {
        self.side_to_move == player && self.legal_moves_for(player).is_empty()
    }

    /// `player` has won: the opponent is to move and has nowhere to go.
    pub fn is_winner(&self, player: Player) -> bool {
        self.is_loser(player.opponent())
    }
}
