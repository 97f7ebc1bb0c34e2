//! Distance-graph error type.

use thiserror::Error;

/// Errors produced by `dlv-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("location {0:?} not found in distance table")]
    LocationNotFound(String),

    #[error("no distance recorded between {from:?} and {to:?}")]
    MissingDistance { from: String, to: String },

    #[error("malformed distance data at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
