//! Game and match results, and the end-of-match report

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::Result;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same result seen from the other engine.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        })
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEnd {
    /// The side to move had lost its king
    KingCaptured,
    /// The side to move had no legal move
    NoMoves,
    /// An engine answered with a move that is not legal, or with none
    IllegalMove,
    /// Ply limit reached
    MoveLimit,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// A finished match with the names of both engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub games: u32,
    pub depth: u8,
    pub move_time_ms: Option<u64>,
    pub result: MatchResult,
}

impl MatchReport {
    /// Save the report as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Generate a text summary
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n",
            self.engine1, self.engine2
        ));
        match self.move_time_ms {
            Some(ms) => report.push_str(&format!(
                "Games: {}, Depth: {}, Move time: {} ms\n\n",
                self.games, self.depth, ms
            )),
            None => report.push_str(&format!(
                "Games: {}, Depth: {}\n\n",
                self.games, self.depth
            )),
        }
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws\n",
            self.engine1, self.result.wins, self.result.losses, self.result.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n", self.result.score() * 100.0));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
