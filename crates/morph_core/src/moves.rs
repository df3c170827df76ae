use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{MorphError, Result};
use crate::location::Location;

/// An origin/destination pair. `weight` orders candidate moves during search
/// and takes no part in equality.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Location,
    pub to: Location,
    pub weight: u8,
}

impl Move {
    pub fn new(from: Location, to: Location) -> Self {
        Self {
            from,
            to,
            weight: 0,
        }
    }

    pub fn with_weight(from: Location, to: Location, weight: u8) -> Self {
        Self { from, to, weight }
    }

    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// The same move in the opponent's coordinates.
    pub fn flipped(self) -> Self {
        Self {
            from: self.from.flipped(),
            to: self.to.flipped(),
            weight: self.weight,
        }
    }

    pub fn to_flipped_string(self) -> String {
        format!(
            "{}{}",
            self.from.to_flipped_string(),
            self.to.to_flipped_string()
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MorphError;

    /// Parses `"A2C3"`-style text.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(MorphError::InvalidMove(s.to_string()));
        }
        let from = s[0..2]
            .parse()
            .map_err(|_| MorphError::InvalidMove(s.to_string()))?;
        let to = s[2..4]
            .parse()
            .map_err(|_| MorphError::InvalidMove(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}

/// Candidate moves for one side, in generation order until sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// Stable ascending sort on move weight; equal weights keep generation order.
    pub fn sort_by_weight(&mut self) {
        self.0.sort_by_key(|mv| mv.weight);
    }
}

impl Deref for Moves {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.0
    }
}

impl FromIterator<Move> for Moves {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Move> for Moves {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
