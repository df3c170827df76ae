pub mod board;
pub mod error;
pub mod location;
pub mod movegen;
pub mod moves;
pub mod protocol;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{MorphError, Result};
pub use location::*;
pub use moves::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move-picking engine
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score from the searching side's perspective
    pub score: i32,
    /// Depth of the iteration the move came from
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether the chosen result came from an interrupted iteration
    pub stopped: bool,
}

impl SearchResult {
    /// Result for a side with nothing to play.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all engines implement, so matches can swap them freely.
pub trait Engine: Send {
    /// Pick a move for `player` on `board` within `limits`.
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "morph"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
