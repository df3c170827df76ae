use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Upper-case pieces, starts on rows 7-8 and moves toward row 1.
    North,
    /// Lower-case pieces, starts on rows 1-3 and moves toward row 8.
    South,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::North => Player::South,
            Player::South => Player::North,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Player::North => -1,
            Player::South => 1,
        }
    }

    /// True when a step of `row_delta` heads toward this player's home edge.
    pub fn is_backward(self, row_delta: i8) -> bool {
        match self {
            Player::North => row_delta > 0,
            Player::South => row_delta < 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::North => f.write_str("North"),
            Player::South => f.write_str("South"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Bishop,
    Rook,
    Knight,
    Pawn,
    King,
}

/// Every value a board cell can hold. The owner is part of the identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    NorthBishop,
    NorthRook,
    NorthKnight,
    NorthPawn,
    NorthKing,
    SouthBishop,
    SouthRook,
    SouthKnight,
    SouthPawn,
    SouthKing,
}

impl Piece {
    pub const ALL: [Piece; 11] = [
        Piece::Empty,
        Piece::NorthBishop,
        Piece::NorthRook,
        Piece::NorthKnight,
        Piece::NorthPawn,
        Piece::NorthKing,
        Piece::SouthBishop,
        Piece::SouthRook,
        Piece::SouthKnight,
        Piece::SouthPawn,
        Piece::SouthKing,
    ];

    pub fn new(owner: Player, kind: PieceKind) -> Piece {
        match (owner, kind) {
            (Player::North, PieceKind::Bishop) => Piece::NorthBishop,
            (Player::North, PieceKind::Rook) => Piece::NorthRook,
            (Player::North, PieceKind::Knight) => Piece::NorthKnight,
            (Player::North, PieceKind::Pawn) => Piece::NorthPawn,
            (Player::North, PieceKind::King) => Piece::NorthKing,
            (Player::South, PieceKind::Bishop) => Piece::SouthBishop,
            (Player::South, PieceKind::Rook) => Piece::SouthRook,
            (Player::South, PieceKind::Knight) => Piece::SouthKnight,
            (Player::South, PieceKind::Pawn) => Piece::SouthPawn,
            (Player::South, PieceKind::King) => Piece::SouthKing,
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Piece::Empty => None,
            Piece::NorthBishop
            | Piece::NorthRook
            | Piece::NorthKnight
            | Piece::NorthPawn
            | Piece::NorthKing => Some(Player::North),
            Piece::SouthBishop
            | Piece::SouthRook
            | Piece::SouthKnight
            | Piece::SouthPawn
            | Piece::SouthKing => Some(Player::South),
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::NorthBishop | Piece::SouthBishop => Some(PieceKind::Bishop),
            Piece::NorthRook | Piece::SouthRook => Some(PieceKind::Rook),
            Piece::NorthKnight | Piece::SouthKnight => Some(PieceKind::Knight),
            Piece::NorthPawn | Piece::SouthPawn => Some(PieceKind::Pawn),
            Piece::NorthKing | Piece::SouthKing => Some(PieceKind::King),
        }
    }

    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Piece::NorthKing | Piece::SouthKing)
    }

    /// Material value used by the leaf evaluation.
    pub fn weight(self) -> i32 {
        match self.kind() {
            None => 0,
            Some(PieceKind::Pawn) => 1,
            Some(PieceKind::Bishop | PieceKind::Rook | PieceKind::Knight) => 6,
            Some(PieceKind::King) => 1000,
        }
    }

    /// Ordering key for a move landing on this piece, lowest searched first:
    /// king captures, then other captures, then quiet moves.
    pub fn move_weight(self) -> u8 {
        match self.kind() {
            Some(PieceKind::King) => 0,
            Some(_) => 1,
            None => 2,
        }
    }

    /// Identity after this piece captures: Bishop -> Knight -> Rook -> Bishop.
    pub fn morph(self) -> Piece {
        match self {
            Piece::NorthBishop => Piece::NorthKnight,
            Piece::NorthKnight => Piece::NorthRook,
            Piece::NorthRook => Piece::NorthBishop,
            Piece::SouthBishop => Piece::SouthKnight,
            Piece::SouthKnight => Piece::SouthRook,
            Piece::SouthRook => Piece::SouthBishop,
            other => other,
        }
    }

    /// Exact inverse of [`Piece::morph`].
    pub fn unmorph(self) -> Piece {
        match self {
            Piece::NorthKnight => Piece::NorthBishop,
            Piece::NorthRook => Piece::NorthKnight,
            Piece::NorthBishop => Piece::NorthRook,
            Piece::SouthKnight => Piece::SouthBishop,
            Piece::SouthRook => Piece::SouthKnight,
            Piece::SouthBishop => Piece::SouthRook,
            other => other,
        }
    }

    pub fn code(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::NorthBishop => 'B',
            Piece::NorthRook => 'R',
            Piece::NorthKnight => 'N',
            Piece::NorthPawn => 'P',
            Piece::NorthKing => 'K',
            Piece::SouthBishop => 'b',
            Piece::SouthRook => 'r',
            Piece::SouthKnight => 'n',
            Piece::SouthPawn => 'p',
            Piece::SouthKing => 'k',
        }
    }

    pub fn from_code(code: char) -> Option<Piece> {
        Piece::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
