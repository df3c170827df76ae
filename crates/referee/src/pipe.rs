//! Two-process referee
//!
//! Spawns two engine binaries in pipe mode and connects them: every line one
//! engine prints is echoed, and forwarded to the other engine unless it is a
//! protocol marker. The first `Won` or `Lost` decides the game.

use std::fmt;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use morph_core::protocol::{Line, Marker};
use tracing::{debug, info, warn};

use crate::error::{RefereeError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Seat::First => "engine1",
            Seat::Second => "engine2",
        })
    }
}

#[derive(Debug, Clone)]
pub struct PipeConfig {
    pub binary1: PathBuf,
    pub binary2: PathBuf,
    /// Seat that makes the first move
    pub first: Seat,
    /// Passed to both engines after the pipe arguments
    pub engine_args: Vec<String>,
}

impl PipeConfig {
    pub fn binary(&self, seat: Seat) -> &Path {
        match seat {
            Seat::First => &self.binary1,
            Seat::Second => &self.binary2,
        }
    }

    /// Command line for the engine in `seat`.
    pub fn args_for(&self, seat: Seat) -> Vec<String> {
        let goes_first = if seat == self.first { "true" } else { "false" };
        let mut args = vec!["pipe".to_string(), "--first".to_string(), goes_first.to_string()];
        args.extend(self.engine_args.iter().cloned());
        args
    }
}

/// Traffic seen by the relay threads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Line(Seat, String),
    /// The engine's stdout reached end of file.
    Closed(Seat),
}

/// Winner implied by `marker` when printed by the engine in `seat`.
pub fn winner(seat: Seat, marker: Marker) -> Option<Seat> {
    match marker {
        Marker::Won => Some(seat),
        Marker::Lost => Some(seat.other()),
        Marker::AwaitingInput | Marker::InputReceived => None,
    }
}

/// Reads lines from one engine, forwards the relayed ones to the other and
/// reports every line as an event. Stops at end of input or once nobody is
/// listening for events.
pub fn relay<R: BufRead, W: Write>(
    seat: Seat,
    from: R,
    mut to: W,
    events: &Sender<Event>,
) -> io::Result<()> {
    for line in from.lines() {
        let line = line?;
        if Line::parse(&line).is_relayed() {
            // The opponent may already have exited after its last move.
            if let Err(err) = writeln!(to, "{}", line.trim()).and_then(|()| to.flush()) {
                debug!(%seat, %err, "could not forward line");
            }
        }
        if events.send(Event::Line(seat, line)).is_err() {
            break;
        }
    }
    Ok(())
}

/// Echoes events until a result marker arrives. Returns None when both
/// engines closed their output without one.
pub fn judge(events: &Receiver<Event>, mut echo: impl FnMut(Seat, &str)) -> Option<Seat> {
    let mut open = 2;
    for event in events.iter() {
        match event {
            Event::Line(seat, text) => {
                echo(seat, &text);
                if let Line::Marker(marker) = Line::parse(&text)
                    && let Some(won) = winner(seat, marker)
                {
                    return Some(won);
                }
            }
            Event::Closed(seat) => {
                debug!(%seat, "engine closed its output");
                open -= 1;
                if open == 0 {
                    return None;
                }
            }
        }
    }
    None
}

/// Runs one game between the two binaries, echoing traffic to stdout.
pub fn run_pipe(config: &PipeConfig) -> Result<Option<Seat>> {
    let mut child1 = spawn(config.binary(Seat::First), &config.args_for(Seat::First))?;
    let mut child2 = match spawn(config.binary(Seat::Second), &config.args_for(Seat::Second)) {
        Ok(child) => child,
        Err(err) => {
            stop(&mut child1);
            return Err(err);
        }
    };
    info!(first = %config.first, "engines started");

    let pipes = take_pipes(&mut child1, config.binary(Seat::First)).and_then(|p1| {
        take_pipes(&mut child2, config.binary(Seat::Second)).map(|p2| (p1, p2))
    });
    let ((in1, out1), (in2, out2)) = match pipes {
        Ok(pipes) => pipes,
        Err(err) => {
            stop(&mut child1);
            stop(&mut child2);
            return Err(err);
        }
    };

    let (tx, rx) = unbounded();
    let relays = [(Seat::First, out1, in2), (Seat::Second, out2, in1)].map(|(seat, out, input)| {
        let tx = tx.clone();
        thread::spawn(move || {
            if let Err(err) = relay(seat, BufReader::new(out), input, &tx) {
                warn!(%seat, %err, "reading engine output failed");
            }
            let _ = tx.send(Event::Closed(seat));
        })
    });
    drop(tx);

    let won = judge(&rx, |seat, line| println!("{seat}: \t{line}"));
    drop(rx);

    stop(&mut child1);
    stop(&mut child2);
    for handle in relays {
        if handle.join().is_err() {
            warn!("relay thread panicked");
        }
    }

    Ok(won)
}

fn spawn(path: &Path, args: &[String]) -> Result<Child> {
    debug!(path = %path.display(), ?args, "spawning engine");
    Command::new(path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|source| RefereeError::Spawn {
            path: path.to_path_buf(),
            source,
        })
}

fn take_pipes(child: &mut Child, path: &Path) -> Result<(ChildStdin, ChildStdout)> {
    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| RefereeError::MissingPipe(path.to_path_buf(), "stdin"))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| RefereeError::MissingPipe(path.to_path_buf(), "stdout"))?;
    Ok((stdin, stdout))
}

/// Kills the engine if it is still running and reaps it.
fn stop(child: &mut Child) {
    if let Err(err) = child.kill() {
        debug!(%err, "engine already exited");
    }
    if let Err(err) = child.wait() {
        warn!(%err, "failed to reap engine");
    }
}

#[cfg(test)]
#[path = "pipe_tests.rs"]
mod pipe_tests;
