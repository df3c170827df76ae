//! Score constants and the leaf evaluation.

use morph_core::{Board, Player};

/// Bound no real score reaches; the initial best of every node.
pub const BEST: i32 = 9_999_999;
/// Base of forced results. A side without a king or without moves at ply
/// `p` scores `-(WIN - p)`.
pub const WIN: i32 = 2_000_000;
/// Deepest ply a search may reach.
pub const MAX_PLY: u8 = 64;
/// Any score at or beyond this magnitude is a forced result.
pub const WIN_THRESHOLD: i32 = WIN - MAX_PLY as i32;
/// Points per move of mobility advantage over the parent position.
pub const MOBILITY_WEIGHT: i32 = 2;

/// Leaf score from `side`'s perspective: material balance plus the change in
/// mobility relative to the opponent's position one ply up.
pub fn evaluate(board: &Board, side: Player, own_moves: usize, parent_moves: usize) -> i32 {
    board.weighted_score_for(side) + MOBILITY_WEIGHT * (own_moves as i32 - parent_moves as i32)
}

/// Score of a side that has lost at `ply`; losses further away score higher.
#[inline]
pub fn loss_score(ply: u8) -> i32 {
    -(WIN - ply as i32)
}

#[inline]
pub fn is_forced(score: i32) -> bool {
    score.abs() >= WIN_THRESHOLD
}
