use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefereeError {
    #[error("unknown engine '{0}' (expected minimax[:plies] or random[:seed])")]
    UnknownEngine(String),

    #[error("failed to read config {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid match config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to write report: {0}")]
    SaveReport(#[from] toml::ser::Error),

    #[error("failed to start engine {}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("engine {} has no {} pipe", .0.display(), .1)]
    MissingPipe(PathBuf, &'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RefereeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
