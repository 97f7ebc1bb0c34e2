//! `dlv-output` — replay event writers for the parcel delivery simulator.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `delivery_events.csv`, `fleet_mileage.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `dlv_sim::ReplayObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dlv_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &sim.config);
//! sim.run_at(query, &mut obs)?;
//! obs.finish();
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryEventRow, EventKind, FleetMileageRow};
pub use writer::OutputWriter;
