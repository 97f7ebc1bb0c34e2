//! Replay observer trait for logging and event export.

use dlv_core::{ClockTime, ParcelId, VehicleId};
use dlv_dispatch::Route;

use crate::Vehicle;

/// Callbacks invoked by [`Sim::run_at`][crate::Sim::run_at] while a query
/// is replayed.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: delivery printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl ReplayObserver for Printer {
///     fn on_delivery(&mut self, vehicle: VehicleId, parcel: ParcelId, at: ClockTime, _: &str) {
///         println!("{vehicle} delivered {parcel} at {at}");
///     }
/// }
/// ```
pub trait ReplayObserver {
    /// Called once per query, before any state is rebuilt.
    fn on_query_start(&mut self, _query: ClockTime) {}

    /// Called after each vehicle's route is planned.
    fn on_route_planned(&mut self, _route: &Route) {}

    /// Called for free-text notes raised during the replay.
    fn on_note(&mut self, _note: &str) {}

    /// Called when a vehicle leaves the depot (only if it leaves before the
    /// query time).
    fn on_departure(&mut self, _vehicle: VehicleId, _at: ClockTime) {}

    /// Called for each stop completed before the query time.
    fn on_delivery(
        &mut self,
        _vehicle:  VehicleId,
        _parcel:   ParcelId,
        _at:       ClockTime,
        _location: &str,
    ) {}

    /// Called when a vehicle is back at the depot.
    fn on_return(&mut self, _vehicle: VehicleId, _at: ClockTime) {}

    /// Called once after every vehicle has been replayed.
    fn on_query_end(&mut self, _query: ClockTime, _vehicles: &[Vehicle]) {}
}

/// A [`ReplayObserver`] that does nothing.
pub struct NoopObserver;

impl ReplayObserver for NoopObserver {}
