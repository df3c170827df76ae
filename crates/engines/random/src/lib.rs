//! Random Move Engine
//!
//! Selects moves uniformly at random from all legal moves. Useful as a
//! baseline opponent and for stress testing move generation through the
//! match runner.

use morph_core::{Board, Engine, Player, SearchLimits, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;


/// An engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence, for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, player: Player, _limits: SearchLimits) -> SearchResult {
        let moves = board.legal_moves(player);
        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
