use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("branch count must be non-negative, got {0}")]
    NegativeBranchCount(i64),

    #[error("branch count {0} is too large")]
    BranchCountTooLarge(i64),

    #[error("invalid seed `{0}` (expected an unsigned integer)")]
    InvalidSeed(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
