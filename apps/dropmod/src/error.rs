//! Errors surfaced by the CLI.

use dropmod_core::DropError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A core validation error (bad block id, bad chance).
    #[error(transparent)]
    Drop(#[from] DropError),

    /// Reading or writing the config file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or has the wrong shape.
    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `init` refused to overwrite an existing file.
    #[error("Config file already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// A `/drops` command replied with an error or asked for usage.
    #[error("{0}")]
    Command(String),

    /// Writing to the terminal failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serialising JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
