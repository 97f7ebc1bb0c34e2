//! `dlv-sim` — per-query fleet replay for the parcel delivery simulator.
//!
//! # Query cycle
//!
//! ```text
//! run_at(query):
//!   ① Reset    — every vehicle back to the depot at day_start.
//!   ② Reload   — parcel store rebuilt from the dataset.
//!   ③ Route    — RoutePlanner orders each vehicle's tiers.
//!   ④ Correct  — query < cutoff: fix the configured parcel's address;
//!                otherwise report the correction as already applied.
//!   ⑤ Replay   — vehicles in table order:
//!                  waiting vehicle → departure from awaited returns
//!                  query ≥ departure → load, deliver while arrival < query,
//!                  then head back to the depot from the last stop reached
//! ```
//!
//! Nothing carries over between queries, so the same query always produces
//! the same statuses and mileage.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dlv_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let parcels = dlv_store::load_parcels_csv(Path::new("data/packages.csv"))?;
//! let graph = dlv_graph::load_distances_csv(Path::new("data/distances.csv"))?;
//! let mut sim = SimBuilder::new(SimConfig::standard(), parcels, graph).build()?;
//! let outcome = sim.run_at(ClockTime::from_hms(13, 0, 0), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod replay;
pub mod sim;
pub mod vehicle;


pub use builder::SimBuilder;
pub use config::{AddressCorrection, DependentDeparture, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ReplayObserver};
pub use replay::replay_vehicle;
pub use sim::{ReplayOutcome, Sim};
pub use vehicle::Vehicle;
