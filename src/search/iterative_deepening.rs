//! Iterative deepening driver for the time-bounded engines.
//!
//! Re-searches the root at depth 1, 2, 3, ... and keeps the (score, move)
//! pair of the last depth that ran to completion. An abort raised by the
//! deadline monitor ends the loop immediately; the aborted depth's partial
//! work is discarded wholesale, because only fully completed depths carry
//! minimax-correct scores.

use std::time::Instant;

use crate::game_state::game_state::GameState;
use crate::game_state::grid_types::{CellMove, Player};
use crate::search::alpha_beta::alpha_beta_root;
use crate::search::board_scoring::BoardScorer;
use crate::search::deadline::{DeadlineMonitor, SearchAborted, SearchOutcome};
use crate::search::minimax::{minimax, ScoredMove};

/// Which engine the driver (and the move selector) dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    Minimax,
    AlphaBeta,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub method: SearchMethod,
    /// Hard depth cap; `None` leaves the deadline as the only stop.
    pub max_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            method: SearchMethod::AlphaBeta,
            max_depth: None,
        }
    }
}

/// Outcome of one driver run. `reached_depth` is the deepest fully completed
/// iteration; 0 means not even depth 1 finished and `best_move` is empty.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Option<CellMove>,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub nps: u64,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            best_move: None,
            best_score: f64::NEG_INFINITY,
            reached_depth: 0,
            nodes: 0,
            elapsed_ms: 0,
            nps: 0,
        }
    }
}

/// One fixed-depth engine invocation, dispatched by method.
pub fn search_at_depth<S: BoardScorer>(
    method: SearchMethod,
    state: &GameState,
    scorer: &S,
    player: Player,
    depth: u8,
    monitor: &DeadlineMonitor<'_>,
    nodes: &mut u64,
) -> SearchOutcome<ScoredMove> {
    match method {
        SearchMethod::Minimax => minimax(state, scorer, player, depth, true, monitor, nodes),
        SearchMethod::AlphaBeta => alpha_beta_root(state, scorer, player, depth, monitor, nodes),
    }
}

pub fn iterative_deepening_search<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
    player: Player,
    config: SearchConfig,
    monitor: &DeadlineMonitor<'_>,
) -> SearchResult {
    let started_at = Instant::now();
    let mut result = SearchResult::default();
    let mut total_nodes = 0u64;

    let mut depth: u8 = 1;
    loop {
        if let Some(cap) = config.max_depth {
            if depth > cap {
                break;
            }
        }

        let mut nodes = 0u64;
        match search_at_depth(
            config.method,
            state,
            scorer,
            player,
            depth,
            monitor,
            &mut nodes,
        ) {
            Ok(completed) => {
                total_nodes += nodes;
                result.best_move = completed.cell;
                result.best_score = completed.score;
                result.reached_depth = depth;
            }
            Err(SearchAborted) => {
                // Partial nodes still count as work done, but the aborted
                // depth contributes nothing to the retained best.
                total_nodes += nodes;
                break;
            }
        }

        // A proven win or loss cannot change at greater depth. This also
        // bounds the loop on exhaustible boards when no deadline is set.
        if result.best_score.is_infinite() {
            break;
        }
        if depth == u8::MAX {
            break;
        }
        depth += 1;
    }

    result.nodes = total_nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result.nps = if result.elapsed_ms == 0 {
        0
    } else {
        result.nodes.saturating_mul(1000) / result.elapsed_ms
    };
    result
}
