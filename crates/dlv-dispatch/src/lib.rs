//! `dlv-dispatch` — turns a vehicle assignment table into ordered routes.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`assignment`] | `VehicleAssignment` — tiers, departure, awaited vehicles  |
//! | [`route`]      | `Route` — the planned stop order for one vehicle          |
//! | [`planner`]    | `RoutePlanner` trait, `PriorityNearestNeighbor`           |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Pluggability
//!
//! `dlv-sim` plans routes through the [`RoutePlanner`] trait, so a different
//! sequencing heuristic can be dropped in without touching the replay loop.
//! [`PriorityNearestNeighbor`] is the default.
//!
//! ```rust,ignore
//! let planner = PriorityNearestNeighbor::default();
//! let route = planner.plan(&assignment, &store, &graph, DEPOT_KEY)?;
//! ```

pub mod assignment;
pub mod error;
pub mod planner;
pub mod route;

#[cfg(test)]
mod tests;

pub use assignment::VehicleAssignment;
pub use error::{DispatchError, DispatchResult};
pub use planner::{nearest_neighbor, PriorityNearestNeighbor, RoutePlanner, DEFAULT_MAX_DISTANCE};
pub use route::Route;
