use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed parcel data at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
