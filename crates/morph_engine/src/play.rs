//! Interactive game against a human at the terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use morph_core::Player;

use crate::game::{ENGINE_SIDE, Game};

/// Asks who moves first until the answer is 1 (engine) or 2 (human).
/// Returns None if input runs out.
pub fn ask_engine_first<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<bool>> {
    let mut line = String::new();
    loop {
        write!(out, "Will the engine go first or second? Enter 1 or 2: ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim() {
            "1" => return Ok(Some(true)),
            "2" => return Ok(Some(false)),
            _ => writeln!(out, "Enter a valid input")?,
        }
    }
}

/// Plays until the game ends or input runs out. Returns the winner.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    engine_first: bool,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Player>> {
    writeln!(out, "\nInitial Board Position:\n{}", game.board())?;
    if engine_first {
        play_engine(game, out)?;
    }

    let mut line = String::new();
    loop {
        if let Some(winner) = game.winner() {
            announce(winner, out)?;
            return Ok(Some(winner));
        }

        loop {
            write!(out, "Enter a move: ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line).context("reading move")? == 0 {
                return Ok(None);
            }
            match game.opponent_move(&line) {
                Ok(_) => break,
                Err(err) => writeln!(out, "{err}")?,
            }
        }

        if let Some(winner) = game.winner() {
            announce(winner, out)?;
            return Ok(Some(winner));
        }
        play_engine(game, out)?;
    }
}

fn play_engine<W: Write>(game: &mut Game, out: &mut W) -> Result<()> {
    let (_, description) = game.engine_move()?;
    writeln!(out, "{description}\n{}", game.board())?;
    Ok(())
}

fn announce<W: Write>(winner: Player, out: &mut W) -> Result<()> {
    if winner == ENGINE_SIDE {
        writeln!(out, "Engine Won")?;
    } else {
        writeln!(out, "Human Won")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
