use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::error::{MorphError, Result};
use crate::location::{Location, BOARD_COLS, BOARD_ROWS};
use crate::moves::Move;
use crate::types::*;

const FOOTER: &str = "A B C D E F";

/// The 8x6 grid, indexed `[row][col]` with row 0 on South's edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Piece; BOARD_COLS as usize]; BOARD_ROWS as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_default()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Piece::Empty; BOARD_COLS as usize]; BOARD_ROWS as usize],
        }
    }

    /// The starting layout:
    ///
    /// ```text
    /// 8   - K - - - -
    /// 7   N B R R B N
    /// 6   - - P P - -
    /// 5   - - - - - -
    /// 4   - - - - - -
    /// 3   - - p p - -
    /// 2   n b r r b n
    /// 1   - - - - k -
    ///
    ///     A B C D E F
    /// ```
    pub fn new_default() -> Self {
        let mut b = Self::empty();
        let back = [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ];
        for (col, &kind) in back.iter().enumerate() {
            b.cells[6][col] = Piece::new(Player::North, kind);
            b.cells[1][col] = Piece::new(Player::South, kind);
        }
        b.cells[7][1] = Piece::NorthKing;
        b.cells[5][2] = Piece::NorthPawn;
        b.cells[5][3] = Piece::NorthPawn;
        b.cells[2][2] = Piece::SouthPawn;
        b.cells[2][3] = Piece::SouthPawn;
        b.cells[0][4] = Piece::SouthKing;
        b
    }

    /// Reads the text layout produced by `Display`. Row labels are ignored;
    /// whitespace between cells may vary.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

        let (footer, rows) = lines.split_last().ok_or(MorphError::RowCount { found: 0 })?;
        let footer_cells: Vec<&str> = footer.split_whitespace().collect();
        if footer_cells.join(" ") != FOOTER {
            return Err(MorphError::MissingFooter);
        }
        if rows.len() != BOARD_ROWS as usize {
            return Err(MorphError::RowCount { found: rows.len() });
        }

        let mut board = Self::empty();
        for (i, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.split_whitespace().skip(1).collect();
            if cells.len() != BOARD_COLS as usize || cells.iter().any(|c| c.chars().count() != 1) {
                return Err(MorphError::ColumnCount {
                    row: i,
                    found: cells.len(),
                });
            }
            let row = BOARD_ROWS as usize - 1 - i;
            for (col, cell) in cells.iter().enumerate() {
                let code = cell.chars().next().unwrap_or('?');
                board.cells[row][col] = Piece::from_code(code).ok_or(MorphError::UnknownPiece(code))?;
            }
        }
        Ok(board)
    }

    /// `None` for off-board locations, so directional scans can probe freely.
    #[inline]
    pub fn piece_at(&self, loc: Location) -> Option<Piece> {
        if loc.is_on_board() {
            Some(self.cells[loc.row as usize][loc.col as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn set_piece(&mut self, loc: Location, piece: Piece) {
        assert!(loc.is_on_board(), "cannot place a piece off the board at {loc}");
        self.cells[loc.row as usize][loc.col as usize] = piece;
    }

    #[inline]
    fn cell(&self, loc: Location) -> Piece {
        assert!(loc.is_on_board(), "cannot read off the board at {loc}");
        self.cells[loc.row as usize][loc.col as usize]
    }

    /// Moves the piece at `from` onto `to`, morphing it, and returns whatever
    /// stood on `to` (possibly `Empty`). Pair with [`Board::retract_move`].
    pub fn make_move_and_get_taken_piece(&mut self, mv: Move) -> Piece {
        let taken = self.cell(mv.to);
        let moved = self.cell(mv.from);
        self.set_piece(mv.to, moved.morph());
        self.set_piece(mv.from, Piece::Empty);
        taken
    }

    /// Undoes [`Board::make_move_and_get_taken_piece`] exactly.
    pub fn retract_move(&mut self, mv: Move, taken: Piece) {
        let moved = self.cell(mv.to);
        self.set_piece(mv.from, moved.unmorph());
        self.set_piece(mv.to, taken);
    }

    /// Makes `mv` for the lifetime of the returned guard; dropping the guard
    /// retracts it.
    pub fn apply(&mut self, mv: Move) -> AppliedMove<'_> {
        let taken = self.make_move_and_get_taken_piece(mv);
        AppliedMove {
            board: self,
            mv,
            taken,
        }
    }

    /// Makes `mv` and returns a line describing it for the game log.
    pub fn make_move_and_describe(&mut self, mv: Move) -> String {
        let mover = self.piece_at(mv.from).and_then(Piece::owner);
        let taken = self.make_move_and_get_taken_piece(mv);
        let mut line = match mover {
            Some(player) => format!("{player} made move {mv} ({})", mv.to_flipped_string()),
            None => format!("made move {mv} ({})", mv.to_flipped_string()),
        };
        if !taken.is_empty() {
            line.push_str(&format!(" and captured piece {taken}"));
        }
        line
    }

    pub fn has_king(&self, player: Player) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|p| p.is_king() && p.is_owned_by(player))
    }

    /// True when `player` has lost their king or has nothing to play.
    pub fn is_game_over_for(&self, player: Player, moves: &[Move]) -> bool {
        moves.is_empty() || !self.has_king(player)
    }

    /// Material balance from `player`'s side; the opposite side sees the negation.
    pub fn weighted_score_for(&self, player: Player) -> i32 {
        self.cells
            .iter()
            .flatten()
            .map(|&p| if p.is_owned_by(player) { p.weight() } else { -p.weight() })
            .sum()
    }

    pub fn is_legal_move(&self, player: Player, mv: Move) -> bool {
        mv.from.is_on_board() && mv.to.is_on_board() && self.legal_moves(player).contains(&mv)
    }

    /// Parses move text and resolves it against `player`'s legal moves, so the
    /// returned move carries its ordering weight.
    pub fn parse_legal_move(&self, player: Player, text: &str) -> Result<Move> {
        let wanted: Move = text.parse()?;
        self.legal_moves(player)
            .iter()
            .find(|&&mv| mv == wanted)
            .copied()
            .ok_or_else(|| MorphError::IllegalMove(text.trim().to_string()))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().flatten().filter(|&&p| p == piece).count()
    }
}

impl FromStr for Board {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_ROWS as usize).rev() {
            write!(f, "{}  ", row + 1)?;
            for piece in &self.cells[row] {
                write!(f, " {piece}")?;
            }
            writeln!(f)?;
        }
        write!(f, "\n    {FOOTER}")
    }
}

/// A move held on the board until this guard is dropped.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    mv: Move,
    taken: Piece,
}

impl AppliedMove<'_> {
    pub fn taken(&self) -> Piece {
        self.taken
    }

    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.retract_move(self.mv, self.taken);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
