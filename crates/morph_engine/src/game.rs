//! One game between the engine and an outside player.
//!
//! The engine always plays North; the human or opposing engine plays South.

use std::time::Duration;

use anyhow::{Result, anyhow};
use minimax_engine::MinimaxEngine;
use morph_core::{Board, Move, Player, SearchLimits};
use tracing::info;

pub const ENGINE_SIDE: Player = Player::North;
pub const OPPONENT_SIDE: Player = Player::South;

pub struct Game {
    board: Board,
    engine: MinimaxEngine,
    depth: u8,
    move_time: Option<Duration>,
}

impl Game {
    pub fn new(engine: MinimaxEngine, depth: u8, move_time: Option<Duration>) -> Self {
        Self {
            board: Board::new_default(),
            engine,
            depth,
            move_time,
        }
    }

    #[cfg(test)]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn limits(&self) -> SearchLimits {
        match self.move_time {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }

    /// Searches and plays the engine's move. Returns the move and a line
    /// describing it.
    pub fn engine_move(&mut self) -> Result<(Move, String)> {
        let result = self
            .engine
            .find_best_move(&self.board, ENGINE_SIDE, self.limits());
        let mv = result
            .best_move
            .ok_or_else(|| anyhow!("engine has no legal move"))?;
        info!(%mv, score = result.score, depth = result.depth, nodes = result.nodes, "engine move");
        let description = self.board.make_move_and_describe(mv);
        Ok((mv, description))
    }

    /// Validates and plays the opponent's move, given in this board's coordinates.
    pub fn opponent_move(&mut self, text: &str) -> morph_core::Result<Move> {
        let mv = self.board.parse_legal_move(OPPONENT_SIDE, text)?;
        self.board.make_move_and_get_taken_piece(mv);
        Ok(mv)
    }

    /// The winner, if either side has lost its king or has no move.
    /// The engine's side is checked first.
    pub fn winner(&self) -> Option<Player> {
        [ENGINE_SIDE, OPPONENT_SIDE].into_iter().find_map(|side| {
            let moves = self.board.legal_moves(side);
            self.board
                .is_game_over_for(side, &moves)
                .then(|| side.opponent())
        })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
pub(crate) mod game_tests;
