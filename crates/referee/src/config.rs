//! Match configuration, read from TOML and overridden from the command line
//!
//! ```toml
//! num_games = 20
//! depth = 3
//! move_time_ms = 500
//! max_moves = 150
//!
//! [options]
//! ParallelPlies = "1"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use morph_core::{Player, SearchLimits};

use crate::error::{RefereeError, Result};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Depth of the first search iteration
    pub depth: u8,
    /// Thinking time per move (None = fixed depth, no deepening)
    pub move_time_ms: Option<u64>,
    /// Plies per game before declaring a draw
    pub max_moves: u32,
    /// Swap sides every game
    pub alternate_sides: bool,
    /// North makes the first move instead of South
    pub north_first: bool,
    /// Engine options passed to both engines before the match
    pub options: BTreeMap<String, String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            move_time_ms: None,
            max_moves: 200,
            alternate_sides: true,
            north_first: false,
            options: BTreeMap::new(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| RefereeError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }

    /// Fresh limits for one move; each move gets its own clock.
    pub fn search_limits(&self) -> SearchLimits {
        match self.move_time() {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }

    pub fn first_player(&self) -> Player {
        if self.north_first {
            Player::North
        } else {
            Player::South
        }
    }
}

/// Command-line values that replace the ones from the config file.
#[derive(Debug, Clone, Default)]
pub struct MatchOverrides {
    pub num_games: Option<u32>,
    pub depth: Option<u8>,
    pub move_time_ms: Option<u64>,
    pub max_moves: Option<u32>,
}

impl MatchOverrides {
    pub fn apply(self, mut config: MatchConfig) -> MatchConfig {
        if let Some(games) = self.num_games {
            config.num_games = games;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(ms) = self.move_time_ms {
            config.move_time_ms = Some(ms);
        }
        if let Some(max_moves) = self.max_moves {
            config.max_moves = max_moves;
        }
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
