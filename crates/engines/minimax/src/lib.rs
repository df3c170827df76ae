//! Minimax Engine
//!
//! Negamax with alpha-beta pruning, searched in parallel near the root and
//! bounded by a move-time deadline with iterative deepening.

mod cancel;
mod eval;
mod search;

use morph_core::{Board, Engine, Player, SearchLimits, SearchResult};
use tracing::debug;

pub use cancel::CancelToken;
pub use eval::{BEST, MAX_PLY, MOBILITY_WEIGHT, WIN, WIN_THRESHOLD, evaluate, is_forced};
pub use search::{Pick, SearchOutcome};

/// Tuning knobs that are not per-move limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies from the root searched with one thread per child. Zero searches
    /// everything on the calling thread.
    pub parallel_plies: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { parallel_plies: 2 }
    }
}

/// Engine using parallel negamax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Picks a move for `player`. Returns a move whenever one is legal, even
    /// if the deadline passes before any iteration finishes.
    pub fn find_best_move(&self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult {
        let outcome = search::find_best_move(board, player, &limits, self.config.parallel_plies);

        match outcome.pick {
            Some(pick) => {
                debug!(
                    mv = %pick.mv,
                    score = pick.score,
                    depth = pick.depth,
                    nodes = outcome.nodes,
                    elapsed = ?limits.time_control.elapsed(),
                    "search finished"
                );
                SearchResult {
                    best_move: Some(pick.mv),
                    score: pick.score,
                    depth: pick.depth,
                    nodes: outcome.nodes,
                    stopped: pick.interrupted,
                }
            }
            None => SearchResult::no_move(),
        }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult {
        self.find_best_move(board, player, limits)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "ParallelPlies" => match value.parse() {
                Ok(plies) => {
                    self.config.parallel_plies = plies;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
