//! Referee CLI
//!
//! Play Morph engines against each other, in process or as two binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use referee::{
    MatchConfig, MatchOverrides, MatchReport, MatchRunner, PipeConfig, Seat, create_engine, run_pipe,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "referee", about = "Play Morph engines against each other")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an in-process match with alternating sides
    Match {
        /// minimax[:parallel_plies] or random[:seed]
        engine1: String,
        engine2: String,

        /// TOML match config; flags below override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of games to play
        #[arg(long)]
        games: Option<u32>,

        /// Depth of the first search iteration
        #[arg(long)]
        depth: Option<u8>,

        /// Thinking time per move in milliseconds
        #[arg(long)]
        move_time_ms: Option<u64>,

        /// Max plies before declaring a draw
        #[arg(long)]
        max_moves: Option<u32>,

        /// Optional: write the result as TOML to this path
        #[arg(long)]
        report_out: Option<PathBuf>,
    },

    /// Spawn two engine binaries in pipe mode and relay their moves
    Pipe {
        binary1: PathBuf,
        binary2: PathBuf,

        /// Which binary moves first
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        first: u8,

        /// Extra arguments for both engines, after `--`
        #[arg(last = true)]
        engine_args: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Match {
            engine1,
            engine2,
            config,
            games,
            depth,
            move_time_ms,
            max_moves,
            report_out,
        } => {
            let base = match config {
                Some(path) => MatchConfig::load(&path)?,
                None => MatchConfig::default(),
            };
            let config = MatchOverrides {
                num_games: games,
                depth,
                move_time_ms,
                max_moves,
            }
            .apply(base);

            let mut e1 = create_engine(&engine1)?;
            let mut e2 = create_engine(&engine2)?;

            println!("=== Match: {} vs {} ===", e1.name(), e2.name());
            let runner = MatchRunner::new(config);
            let result = runner.run_match(e1.as_mut(), e2.as_mut());

            let report = MatchReport {
                engine1,
                engine2,
                games: runner.config().num_games,
                depth: runner.config().depth,
                move_time_ms: runner.config().move_time_ms,
                result,
            };
            println!();
            print!("{}", report.generate_report());

            if let Some(path) = report_out {
                report
                    .save(&path)
                    .with_context(|| format!("saving report to {}", path.display()))?;
            }
        }
        Command::Pipe {
            binary1,
            binary2,
            first,
            engine_args,
        } => {
            let config = PipeConfig {
                binary1,
                binary2,
                first: if first == 1 { Seat::First } else { Seat::Second },
                engine_args,
            };
            match run_pipe(&config)? {
                Some(seat) => println!("{} Won!", display_name(&config, seat)),
                None => println!("Both engines stopped without a result"),
            }
        }
    }

    Ok(())
}

fn display_name(config: &PipeConfig, seat: Seat) -> String {
    let path = config.binary(seat);
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
