//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant through `#[from]`.

use thiserror::Error;

/// Errors raised while building or parsing core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("cannot parse time {0:?}: expected HH:MM:SS")]
    TimeParse(String),

    #[error("time component {component} = {value} is out of range (max {max})")]
    TimeOutOfRange {
        component: &'static str,
        value:     u32,
        max:       u32,
    },
}

/// Shorthand result type for `dlv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
