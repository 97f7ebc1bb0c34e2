//! Query requests.

use dlv_core::{ClockTime, ParcelId};

use crate::QueryResult;

/// What a query reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// One parcel's row plus the mileage summary.
    Single(ParcelId),
    /// Every parcel in id order plus the mileage summary.
    All,
    /// The mileage summary alone.
    Mileage,
}

/// A point-in-time query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRequest {
    pub time: ClockTime,
    pub kind: QueryKind,
}

impl QueryRequest {
    pub fn new(time: ClockTime, kind: QueryKind) -> Self {
        Self { time, kind }
    }

    /// Build a request from a user-typed `HH:MM:SS` string.
    ///
    /// # Errors
    ///
    /// [`QueryError::Time`][crate::QueryError::Time] for a malformed or
    /// out-of-range time.
    pub fn parse(time: &str, kind: QueryKind) -> QueryResult<Self> {
        Ok(Self::new(ClockTime::parse(time)?, kind))
    }
}
