//! `dlv-store` — parcels, their delivery status, and the keyed parcel store.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`parcel`] | `Parcel`, `Address`, `Deadline`, `DeliveryStatus`          |
//! | [`store`]  | `ParcelStore` — direct-addressed slots keyed by `ParcelId` |
//! | [`loader`] | `load_parcels_csv`, `load_parcels_reader`                  |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                             |
//!
//! # Status lifecycle
//!
//! ```text
//! AtHub ─┐
//!        ├─▶ Loaded(vehicle) ─▶ Delivered { at, vehicle }
//! EnRouteToHub ─┘
//! ```
//!
//! Statuses are rebuilt from the dataset before every query, so `Delivered`
//! is terminal only for the replay that produced it.

pub mod error;
pub mod loader;
pub mod parcel;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use loader::{load_parcels_csv, load_parcels_reader};
pub use parcel::{Address, Deadline, DeliveryStatus, Parcel};
pub use store::ParcelStore;
