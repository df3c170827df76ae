//! Line protocol spoken between two engine processes and the referee.
//!
//! Each engine prints one line per move, in the opponent's (flipped)
//! coordinates, and a final `Won` or `Lost`. The referee forwards every line
//! that is not a marker to the other engine.

use std::fmt;

use crate::moves::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The printing engine has won.
    Won,
    /// The printing engine has lost.
    Lost,
    AwaitingInput,
    InputReceived,
}

impl Marker {
    pub const ALL: [Marker; 4] = [
        Marker::Won,
        Marker::Lost,
        Marker::AwaitingInput,
        Marker::InputReceived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Won => "Won",
            Marker::Lost => "Lost",
            Marker::AwaitingInput => "Awaiting Input",
            Marker::InputReceived => "Input Received",
        }
    }

    /// Whether this marker ends the game.
    pub fn is_result(self) -> bool {
        matches!(self, Marker::Won | Marker::Lost)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified protocol line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Marker(Marker),
    Move(Move),
    /// Anything else; still relayed, the receiving engine decides what to do.
    Other(String),
}

impl Line {
    pub fn parse(text: &str) -> Line {
        let text = text.trim();
        if let Some(marker) = Marker::ALL.into_iter().find(|m| m.as_str() == text) {
            return Line::Marker(marker);
        }
        match text.parse::<Move>() {
            Ok(mv) => Line::Move(mv),
            Err(_) => Line::Other(text.to_string()),
        }
    }

    /// Markers stay between an engine and the referee; everything else is
    /// forwarded to the opponent.
    pub fn is_relayed(&self) -> bool {
        !matches!(self, Line::Marker(_))
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
