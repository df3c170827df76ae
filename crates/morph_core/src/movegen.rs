use crate::board::Board;
use crate::location::Location;
use crate::moves::{Move, Moves};
use crate::types::*;

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (-1, 0), (0, -1), (1, 0)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
];

impl Board {
    /// All moves for `player`, scanning squares row by row from row 0 and
    /// emitting each piece's moves in its fixed direction order.
    pub fn legal_moves(&self, player: Player) -> Moves {
        let mut out = Moves::with_capacity(32);
        for loc in Location::all() {
            if let Some(piece) = self.piece_at(loc).filter(|p| p.is_owned_by(player)) {
                out.extend(self.moves_for_piece_at(piece, player, loc));
            }
        }
        out
    }

    pub fn moves_for_piece_at(&self, piece: Piece, player: Player, loc: Location) -> Moves {
        match piece.kind() {
            Some(PieceKind::Bishop) => self.moves_for_bishop_at(player, loc),
            Some(PieceKind::Rook) => self.moves_for_rook_at(player, loc),
            Some(PieceKind::Knight) => self.moves_for_knight_at(player, loc),
            Some(PieceKind::Pawn) => self.moves_for_pawn_at(player, loc),
            Some(PieceKind::King) => self.moves_for_king_at(player, loc),
            None => Moves::new(),
        }
    }

    pub fn moves_for_bishop_at(&self, player: Player, loc: Location) -> Moves {
        let mut out = Moves::new();
        for (dc, dr) in BISHOP_DIRS {
            self.gen_slider(player, loc, dc, dr, &mut out);
        }
        out
    }

    pub fn moves_for_rook_at(&self, player: Player, loc: Location) -> Moves {
        let mut out = Moves::new();
        for (dc, dr) in ROOK_DIRS {
            self.gen_slider(player, loc, dc, dr, &mut out);
        }
        out
    }

    /// Knights jump; a backward jump is only allowed as a capture.
    pub fn moves_for_knight_at(&self, player: Player, loc: Location) -> Moves {
        let mut out = Moves::new();
        for (dc, dr) in KNIGHT_OFFSETS {
            let to = loc.offset(dc, dr);
            let Some(target) = self.piece_at(to) else {
                continue;
            };
            if target.is_owned_by(player) {
                continue;
            }
            if player.is_backward(dr) && !target.is_owned_by(player.opponent()) {
                continue;
            }
            out.push(Move::with_weight(loc, to, target.move_weight()));
        }
        out
    }

    /// One step forward onto an empty square, or one diagonal step forward
    /// onto an opponent piece.
    pub fn moves_for_pawn_at(&self, player: Player, loc: Location) -> Moves {
        let mut out = Moves::new();
        let dir = player.forward();

        let ahead = loc.offset(0, dir);
        if let Some(target) = self.piece_at(ahead).filter(|p| p.is_empty()) {
            out.push(Move::with_weight(loc, ahead, target.move_weight()));
        }
        for dc in [1, -1] {
            self.push_capture(player, loc, loc.offset(dc, dir), &mut out);
        }
        out
    }

    /// Kings never leave their row. A quiet step goes one column toward the
    /// player's left as seen from their edge; captures may go either way.
    pub fn moves_for_king_at(&self, player: Player, loc: Location) -> Moves {
        let mut out = Moves::new();

        let step = loc.offset(-player.forward(), 0);
        if let Some(target) = self.piece_at(step).filter(|p| p.is_empty()) {
            out.push(Move::with_weight(loc, step, target.move_weight()));
        }
        for dc in [1, -1] {
            self.push_capture(player, loc, loc.offset(dc, 0), &mut out);
        }
        out
    }

    fn push_capture(&self, player: Player, from: Location, to: Location, out: &mut Moves) {
        if let Some(target) = self.piece_at(to).filter(|p| p.is_owned_by(player.opponent())) {
            out.push(Move::with_weight(from, to, target.move_weight()));
        }
    }

    /// Walks from `from` in steps of (`dc`, `dr`) until blocked. Moving
    /// backward, empty squares are passed over without being offered, so
    /// backward slides only ever capture.
    fn gen_slider(&self, player: Player, from: Location, dc: i8, dr: i8, out: &mut Moves) {
        let backward = player.is_backward(dr);
        let mut to = from.offset(dc, dr);
        while let Some(target) = self.piece_at(to) {
            if target.is_owned_by(player) {
                break;
            }
            if !(backward && target.is_empty()) {
                out.push(Move::with_weight(from, to, target.move_weight()));
                if !target.is_empty() {
                    break;
                }
            }
            to = to.offset(dc, dr);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
