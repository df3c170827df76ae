//! Morph engine binary
//!
//! `play` runs an interactive game at the terminal. `pipe` speaks the line
//! protocol used when two engines play through the referee. Logs go to
//! stderr so stdout carries only the game.

mod game;
mod pipe;
mod play;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use minimax_engine::{MinimaxEngine, SearchConfig};
use morph_core::{DEFAULT_DEPTH, DEFAULT_MOVE_TIME};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::game::Game;

#[derive(Parser, Debug)]
#[command(name = "morph_engine", about = "Minimax engine for the Morph board game")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against a human at the terminal
    Play {
        /// Who moves first; asked interactively when omitted
        #[arg(long, value_enum)]
        first: Option<First>,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Play another engine over stdin/stdout
    Pipe {
        /// Whether this engine makes the first move
        #[arg(long, action = clap::ArgAction::Set)]
        first: bool,

        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum First {
    Engine,
    Human,
}

#[derive(ClapArgs, Debug)]
struct SearchArgs {
    /// Depth of the first search iteration
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Thinking time per move in milliseconds; 0 searches to the fixed depth
    #[arg(long, default_value_t = DEFAULT_MOVE_TIME.as_millis() as u64)]
    move_time_ms: u64,

    /// Plies from the root searched with one thread per move
    #[arg(long, default_value_t = SearchConfig::default().parallel_plies)]
    parallel_plies: u8,
}

impl SearchArgs {
    fn game(&self) -> Game {
        let engine = MinimaxEngine::with_config(SearchConfig {
            parallel_plies: self.parallel_plies,
        });
        let move_time = (self.move_time_ms > 0).then(|| Duration::from_millis(self.move_time_ms));
        Game::new(engine, self.depth, move_time)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    match Args::parse().command {
        Command::Play { first, search } => {
            let engine_first = match first {
                Some(first) => first == First::Engine,
                None => match play::ask_engine_first(&mut input, &mut stdout)? {
                    Some(engine_first) => engine_first,
                    None => return Ok(()),
                },
            };
            let mut game = search.game();
            play::run(&mut game, engine_first, &mut input, &mut stdout)?;
        }
        Command::Pipe { first, search } => {
            let mut game = search.game();
            let winner = pipe::run(&mut game, first, input, &mut stdout)?;
            info!(?winner, "game over");
        }
    }

    Ok(())
}
