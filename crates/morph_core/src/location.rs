use std::fmt;
use std::str::FromStr;

use crate::error::{MorphError, Result};

pub const BOARD_ROWS: i8 = 8;
pub const BOARD_COLS: i8 = 6;

const COLUMNS: &[u8; 6] = b"ABCDEF";
const COLUMNS_FLIPPED: &[u8; 6] = b"FEDCBA";

/// A board coordinate. May hold off-board values while scanning; those are
/// never written into a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: i8,
    pub col: i8,
}

impl Location {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (0..BOARD_ROWS).contains(&self.row) && (0..BOARD_COLS).contains(&self.col)
    }

    /// Shifted by `cols` columns and `rows` rows. The result may be off-board.
    #[inline]
    pub fn offset(self, cols: i8, rows: i8) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }

    /// The same square as seen by the opponent across the table.
    pub fn flipped(self) -> Self {
        Self {
            row: BOARD_ROWS - 1 - self.row,
            col: BOARD_COLS - 1 - self.col,
        }
    }

    /// Text in the opponent's coordinates, e.g. `A1` becomes `F8`.
    pub fn to_flipped_string(self) -> String {
        if !self.is_on_board() {
            return self.flipped().to_string();
        }
        format!(
            "{}{}",
            COLUMNS_FLIPPED[self.col as usize] as char,
            BOARD_ROWS - self.row
        )
    }

    /// Iterates every on-board square, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLS).map(move |col| Location::new(row, col)))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        write!(f, "{}{}", COLUMNS[self.col as usize] as char, self.row + 1)
    }
}

impl FromStr for Location {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(MorphError::InvalidLocation(s.to_string()));
        }
        let col = COLUMNS
            .iter()
            .position(|&c| c == b[0].to_ascii_uppercase())
            .ok_or_else(|| MorphError::InvalidLocation(s.to_string()))?;
        if !(b'1'..=b'8').contains(&b[1]) {
            return Err(MorphError::InvalidLocation(s.to_string()));
        }
        Ok(Location::new((b[1] - b'1') as i8, col as i8))
    }
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod location_tests;
