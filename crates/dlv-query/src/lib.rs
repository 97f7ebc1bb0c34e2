//! `dlv-query` — answers "where is parcel X at time T" and "how far has the
//! fleet driven by time T".
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`request`] | `QueryRequest`, `QueryKind`                           |
//! | [`report`]  | `Report`, `MileageSummary` and their text rendering   |
//! | [`facade`]  | `QueryFacade` — one full replay per request           |
//! | [`error`]   | `QueryError`, `QueryResult<T>`                        |
//!
//! # Example
//!
//! ```rust,ignore
//! let mut facade = QueryFacade::load(
//!     Path::new("data/packages.csv"),
//!     Path::new("data/distances.csv"),
//!     SimConfig::standard(),
//! )?;
//! let request = QueryRequest::parse("10:30:00", QueryKind::Single(ParcelId(9)))?;
//! println!("{}", facade.query(&request)?);
//! ```

pub mod error;
pub mod facade;
pub mod report;
pub mod request;


pub use error::{QueryError, QueryResult};
pub use facade::QueryFacade;
pub use report::{MileageSummary, Report};
pub use request::{QueryKind, QueryRequest};
