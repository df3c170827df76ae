//! Pipe protocol: one move per line over stdin/stdout.
//!
//! Input lines are the opponent's moves, already in this engine's
//! coordinates. Output lines are this engine's moves in the opponent's
//! coordinates, then `Won` or `Lost`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use morph_core::Player;
use morph_core::protocol::{Line, Marker};
use tracing::debug;

use crate::game::{ENGINE_SIDE, Game};

/// Plays until the game ends or input runs out. Returns the winner.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    engine_first: bool,
    input: R,
    out: &mut W,
) -> Result<Option<Player>> {
    if engine_first {
        play_engine(game, out)?;
    }

    let mut lines = input.lines();
    loop {
        if let Some(winner) = game.winner() {
            return finish(winner, out).map(Some);
        }

        let mv = loop {
            let Some(line) = lines.next() else {
                debug!("input closed before the game ended");
                return Ok(None);
            };
            let line = line.context("reading opponent move")?;
            match Line::parse(&line) {
                Line::Marker(marker) => debug!(%marker, "ignoring marker"),
                Line::Other(text) if text.is_empty() => {}
                _ => break game.opponent_move(&line)?,
            }
        };
        debug!(%mv, "opponent move");

        if let Some(winner) = game.winner() {
            return finish(winner, out).map(Some);
        }
        play_engine(game, out)?;
    }
}

fn play_engine<W: Write>(game: &mut Game, out: &mut W) -> Result<()> {
    let (mv, _) = game.engine_move()?;
    writeln!(out, "{}", mv.to_flipped_string())?;
    out.flush()?;
    Ok(())
}

fn finish<W: Write>(winner: Player, out: &mut W) -> Result<Player> {
    let marker = if winner == ENGINE_SIDE {
        Marker::Won
    } else {
        Marker::Lost
    };
    writeln!(out, "{marker}")?;
    out.flush()?;
    Ok(winner)
}

#[cfg(test)]
#[path = "pipe_tests.rs"]
mod pipe_tests;
