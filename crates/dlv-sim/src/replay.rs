//! Replaying one vehicle's route up to a query time.
//!
//! # Rules
//!
//! ```text
//! query <  departure → nothing happens; parcels keep their dataset status
//! query >= departure → every routed parcel is Loaded(vehicle), then
//!   for stop in route:
//!     arrival = position_time + travel(position → stop)
//!     arrival <  query → Delivered { arrival, vehicle }; advance
//!     arrival >= query → stop delivering
//!   leg from the last position back to the depot, same rule
//! ```
//!
//! A later stop is therefore never delivered while an earlier one is
//! pending.  The return leg is driven from wherever delivering stopped, so
//! a vehicle cut off mid-route still counts as back at the depot once that
//! leg fits before the query.

use tracing::{debug, trace};

use dlv_core::{ClockDuration, ClockTime};
use dlv_graph::DistanceGraph;
use dlv_store::ParcelStore;

use crate::{ReplayObserver, SimError, SimResult, Vehicle};

/// Replay `vehicle` from its departure up to `query`, writing statuses into
/// `store`.
///
/// `vehicle` must have been reset, given its route and departure.
///
/// # Errors
///
/// [`SimError::UnknownParcel`] for a routed parcel missing from `store`;
/// [`SimError::Graph`] for a location missing from `graph`.
pub fn replay_vehicle<O: ReplayObserver>(
    vehicle:   &mut Vehicle,
    store:     &mut ParcelStore,
    graph:     &DistanceGraph,
    depot:     &str,
    speed_mph: f64,
    query:     ClockTime,
    observer:  &mut O,
) -> SimResult<()> {
    if query < vehicle.departure {
        trace!(vehicle = %vehicle.id, departure = %vehicle.departure, "not departed");
        return Ok(());
    }

    for &parcel in &vehicle.route {
        store
            .get_mut(parcel)
            .ok_or(SimError::UnknownParcel(parcel))?
            .mark_loaded(vehicle.id);
    }
    observer.on_departure(vehicle.id, vehicle.departure);

    // ── Stops ─────────────────────────────────────────────────────────────
    for i in 0..vehicle.route.len() {
        let parcel = vehicle.route[i];
        let location = store
            .get(parcel)
            .ok_or(SimError::UnknownParcel(parcel))?
            .location_key();
        let miles = graph.distance(&vehicle.position, &location)?;
        let arrival = vehicle.position_time + ClockDuration::for_distance(miles, speed_mph);
        if arrival >= query {
            debug!(vehicle = %vehicle.id, delivered = i, miles = vehicle.miles, "stopped at query time");
            break;
        }

        vehicle.advance(&location, miles, arrival);
        if let Some(p) = store.get_mut(parcel) {
            p.mark_delivered(arrival, vehicle.id);
        }
        trace!(vehicle = %vehicle.id, %parcel, %arrival, miles, "delivered");
        observer.on_delivery(vehicle.id, parcel, arrival, &location);
    }

    // ── Return leg ────────────────────────────────────────────────────────
    let miles = graph.distance(&vehicle.position, depot)?;
    let arrival = vehicle.position_time + ClockDuration::for_distance(miles, speed_mph);
    if arrival < query {
        vehicle.advance(depot, miles, arrival);
        vehicle.returned = true;
        observer.on_return(vehicle.id, arrival);
    }
    debug!(
        vehicle  = %vehicle.id,
        miles    = vehicle.miles,
        returned = vehicle.returned,
        "route replayed"
    );
    Ok(())
}
