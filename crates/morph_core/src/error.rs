//! Error types for parsing boards, locations and moves.

use thiserror::Error;

/// Errors raised while reading external text (board layouts, move input).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    /// Board text did not contain exactly eight rows
    #[error("incorrect board row count: expected 8, found {found}")]
    RowCount { found: usize },

    /// A board row did not contain exactly six cells
    #[error("incorrect board column count in row {row}: expected 6, found {found}")]
    ColumnCount { row: usize, found: usize },

    /// Column footer line missing after the rows
    #[error("board text is missing the column footer")]
    MissingFooter,

    /// Unrecognized single-character piece code
    #[error("unknown piece code '{0}'")]
    UnknownPiece(char),

    /// Location text is not a column letter followed by a row number on the board
    #[error("invalid location '{0}'")]
    InvalidLocation(String),

    /// Move text is not two locations
    #[error("invalid move '{0}'")]
    InvalidMove(String),

    /// Well-formed move that is not legal in the current position
    #[error("illegal move '{0}'")]
    IllegalMove(String),
}

/// Result type alias for morph_core operations
pub type Result<T> = std::result::Result<T, MorphError>;
