//! Referee for Morph engines
//!
//! Two ways to play engines against each other:
//! - in-process matches over the [`Engine`] trait, with alternating sides
//!   and a W/L/D tally;
//! - the two-process pipe referee, which spawns two engine binaries and
//!   relays their moves line by line.
//!
//! # Usage
//!
//! ```bash
//! # Minimax against the random mover, 20 games at depth 3
//! cargo run -p referee -- match minimax random --games 20 --depth 3
//!
//! # Two engine binaries over stdin/stdout, the second one moving first
//! cargo run -p referee -- pipe ./morph_engine ./other_engine --first 2
//! ```

mod config;
mod error;
mod match_runner;
mod pipe;
mod results;

pub use config::*;
pub use error::{RefereeError, Result};
pub use match_runner::*;
pub use pipe::*;
pub use results::*;

use minimax_engine::{MinimaxEngine, SearchConfig};
use morph_core::Engine;
use random_engine::RandomEngine;

/// Build an engine from a name such as `minimax`, `minimax:0` (parallel
/// plies after the colon), `random` or `random:42` (seed).
pub fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    let (name, arg) = match spec.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (spec, None),
    };

    match (name.to_lowercase().as_str(), arg) {
        ("minimax" | "mm", None) => Ok(Box::new(MinimaxEngine::new())),
        ("minimax" | "mm", Some(plies)) => {
            let parallel_plies = plies
                .parse()
                .map_err(|_| RefereeError::UnknownEngine(spec.to_string()))?;
            Ok(Box::new(MinimaxEngine::with_config(SearchConfig {
                parallel_plies,
            })))
        }
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => {
            let seed = seed
                .parse()
                .map_err(|_| RefereeError::UnknownEngine(spec.to_string()))?;
            Ok(Box::new(RandomEngine::with_seed(seed)))
        }
        _ => Err(RefereeError::UnknownEngine(spec.to_string())),
    }
}
