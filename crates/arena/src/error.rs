//! Host-side failures: configuration, layouts and result files.

use std::path::PathBuf;

use agent_core::OracleError;
use maze_core::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArenaError {
    #[error("failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("game rules rejected a move: {0}")]
    Game(#[from] OracleError),

    #[error("results serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ArenaError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
