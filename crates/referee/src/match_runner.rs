//! Match runner for playing games between engines in one process

use morph_core::{Board, Engine, Move, Player};
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::results::{GameEnd, GameResult, MatchResult};

/// One finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Result for the engine playing South
    pub result: GameResult,
    pub end: GameEnd,
    pub moves: Vec<Move>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        self.apply_options(engine1);
        self.apply_options(engine2);

        let mut result = MatchResult::new();
        for game_num in 0..self.config.num_games {
            let engine1_south = !self.config.alternate_sides || game_num % 2 == 0;

            let record = if engine1_south {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let game_result = if engine1_south {
                record.result
            } else {
                record.result.flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                side = if engine1_south { "S" } else { "N" },
                outcome = %game_result,
                end = ?record.end,
                plies = record.moves.len(),
                "game finished, score {}-{}-{}",
                result.wins,
                result.losses,
                result.draws
            );
        }

        result
    }

    /// Passes the configured engine options on to `engine`.
    fn apply_options(&self, engine: &mut dyn Engine) {
        for (name, value) in &self.config.options {
            if !engine.set_option(name, value) {
                debug!(engine = engine.name(), option = %name, "option not recognized");
            }
        }
    }

    /// Play a single game from the default board
    pub fn play_game(&self, south: &mut dyn Engine, north: &mut dyn Engine) -> GameRecord {
        let mut board = Board::new_default();
        south.new_game();
        north.new_game();

        let mut side = self.config.first_player();
        let mut moves = Vec::new();
        loop {
            let legal = board.legal_moves(side);
            if board.is_game_over_for(side, &legal) {
                let end = if board.has_king(side) {
                    GameEnd::NoMoves
                } else {
                    GameEnd::KingCaptured
                };
                return GameRecord {
                    result: loss_for(side),
                    end,
                    moves,
                };
            }
            if moves.len() >= self.config.max_moves as usize {
                return GameRecord {
                    result: GameResult::Draw,
                    end: GameEnd::MoveLimit,
                    moves,
                };
            }

            let engine: &mut dyn Engine = match side {
                Player::South => &mut *south,
                Player::North => &mut *north,
            };
            let search = engine.search(&board, side, self.config.search_limits());
            let Some(mv) = search.best_move.filter(|mv| legal.contains(mv)) else {
                warn!(engine = engine.name(), %side, mv = ?search.best_move, "engine answered with an illegal move");
                return GameRecord {
                    result: loss_for(side),
                    end: GameEnd::IllegalMove,
                    moves,
                };
            };

            debug!(%side, %mv, score = search.score, depth = search.depth, nodes = search.nodes, "move");
            board.make_move_and_get_taken_piece(mv);
            moves.push(mv);
            side = side.opponent();
        }
    }
}

/// Result for South when `side` loses.
fn loss_for(side: Player) -> GameResult {
    match side {
        Player::South => GameResult::Loss,
        Player::North => GameResult::Win,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
