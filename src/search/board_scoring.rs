//! Pluggable position evaluation for Knight Isolation.
//!
//! Search stays modular by delegating static scoring to this trait, so
//! heuristics can be swapped without touching engine code. Every scorer
//! agrees on decisive states: a lost position is negative infinity and a won
//! position is positive infinity, which is what lets the engines treat those
//! outcomes as absolute.

use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::{CellMove, Player};

pub trait BoardScorer: Send + Sync {
    /// Heuristic value of `state` from `player`'s point of view.
    ///
    /// Decisive states must score `f64::NEG_INFINITY` (lost for `player`) or
    /// `f64::INFINITY` (won); everything else is finite.
    fn score(&self, state: &GameState, player: Player) -> f64;
}

/// `-inf`/`+inf` for decisive states, `None` while the game is still open.
pub fn decisive_score(state: &GameState, player: Player) -> Option<f64> {
    if state.is_loser(player) {
        return Some(f64::NEG_INFINITY);
    }
    if state.is_winner(player) {
        return Some(f64::INFINITY);
    }
    None
}

#[inline]
fn mobility_difference(state: &GameState, player: Player) -> f64 {
    let own = state.legal_moves_for(player).len() as f64;
    let opp = state.legal_moves_for(player.opponent()).len() as f64;
    own - opp
}

#[inline]
fn euclidean(a: CellMove, b: CellMove) -> f64 {
    let dr = f64::from(a.row) - f64::from(b.row);
    let dc = f64::from(a.col) - f64::from(b.col);
    (dr * dr + dc * dc).sqrt()
}

#[inline]
fn board_center(state: &GameState) -> CellMove {
    CellMove::new(state.height / 2, state.width / 2)
}

/// Positional term shared by the distance-based scorers: stay central, keep
/// the opponent at arm's length. Falls back to the mobility difference until
/// both players have been placed.
fn center_distance_term(state: &GameState, player: Player) -> f64 {
    let (own_loc, opp_loc) = match (
        state.player_location(player),
        state.player_location(player.opponent()),
    ) {
        (Some(own), Some(opp)) => (own, opp),
        _ => return mobility_difference(state, player),
    };

    let center = board_center(state);
    euclidean(own_loc, opp_loc) - euclidean(own_loc, center)
}

/// Baseline: own mobility minus opponent mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScorer;

impl BoardScorer for MobilityScorer {
    fn score(&self, state: &GameState, player: Player) -> f64 {
        if let Some(decisive) = decisive_score(state, player) {
            return decisive;
        }
        mobility_difference(state, player)
    }
}

/// Mobility difference with the opponent's options weighted double, trading
/// self-preservation for chasing the opponent into thin territory.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveMobilityScorer;

impl BoardScorer for AggressiveMobilityScorer {
    fn score(&self, state: &GameState, player: Player) -> f64 {
        if let Some(decisive) = decisive_score(state, player) {
            return decisive;
        }
        let own = state.legal_moves_for(player).len() as f64;
        let opp = state.legal_moves_for(player.opponent()).len() as f64;
        own - 2.0 * opp
    }
}

/// Pure positional scorer: distance to the opponent minus distance to the
/// board center.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterDistanceScorer;

impl BoardScorer for CenterDistanceScorer {
    fn score(&self, state: &GameState, player: Player) -> f64 {
        if let Some(decisive) = decisive_score(state, player) {
            return decisive;
        }
        center_distance_term(state, player)
    }
}

/// Game-phase blend: early on (many blanks) the positional term dominates,
/// late in the game mobility dominates. This is the default scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseBlendedScorer;

impl BoardScorer for PhaseBlendedScorer {
    fn score(&self, state: &GameState, player: Player) -> f64 {
        if let Some(decisive) = decisive_score(state, player) {
            return decisive;
        }

        let board_size = f64::from(state.width) * f64::from(state.height);
        let empty_ratio = state.blank_cells().len() as f64 / board_size;

        center_distance_term(state, player) * empty_ratio
            + mobility_difference(state, player) * (1.0 - empty_ratio)
    }
}
