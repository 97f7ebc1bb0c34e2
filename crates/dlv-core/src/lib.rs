//! `dlv-core` — foundational types for the parcel delivery simulator.
//!
//! This crate is a dependency of every other `dlv-*` crate.  It has no
//! `dlv-*` dependencies and only `thiserror` (plus optional `serde`) from the
//! outside world.
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `ParcelId`, `VehicleId`, `LocationId`            |
//! | [`time`]   | `ClockTime`, `ClockDuration`                     |
//! | [`error`]  | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on ids and clock times (`H:MM:SS`) |

pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LocationId, ParcelId, VehicleId};
pub use time::{ClockDuration, ClockTime};
