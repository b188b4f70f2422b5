//! Error type shared by report parsing and analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an analysis run. None of these are recovered from.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read node count: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("invalid node count '{0}': expected a non-negative integer")]
    InvalidNodeCount(String),

    #[error("node count must be greater than zero")]
    ZeroNodeCount,

    #[error("invalid energy reading '{token}' at segment position {position}")]
    InvalidReading { position: usize, token: String },

    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ReportError>;
