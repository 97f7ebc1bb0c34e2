//! Route planning trait and the default priority nearest-neighbour planner.
//!
//! # Algorithm
//!
//! ```text
//! from = depot
//! while any tier is non-empty:
//!     tier = first non-empty tier
//!     i    = candidate in tier nearest to `from` (strictly under max_distance)
//!     stop = tier.remove(i)
//!     route.push(stop); from = stop's location
//! ```
//!
//! Each pick scans its tier once, so a tier of `n` parcels costs O(n²).
//! Ties go to the earliest candidate in tier order, so planning is fully
//! deterministic.

use tracing::{debug, trace};

use dlv_graph::DistanceGraph;
use dlv_store::ParcelStore;
use dlv_core::ParcelId;

use crate::{DispatchError, DispatchResult, Route, VehicleAssignment};

/// Candidates at or beyond this many miles are never selected.
pub const DEFAULT_MAX_DISTANCE: f64 = 140.0;

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable stop-sequencing strategy.
///
/// Implementations must be deterministic: the same assignment, store, and
/// graph always produce the same route.
pub trait RoutePlanner {
    /// Order every parcel in `assignment` into a route starting at
    /// `depot_key`.
    ///
    /// Destinations are read from `store` as it stands, so an address change
    /// applied before planning moves the stop.
    fn plan(
        &self,
        assignment: &VehicleAssignment,
        store:      &ParcelStore,
        graph:      &DistanceGraph,
        depot_key:  &str,
    ) -> DispatchResult<Route>;
}

// ── PriorityNearestNeighbor ───────────────────────────────────────────────────

/// Greedy nearest-neighbour sequencing within strict priority tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityNearestNeighbor {
    /// Exclusive upper bound on a selectable leg, in miles.
    pub max_distance: f64,
}

impl Default for PriorityNearestNeighbor {
    fn default() -> Self {
        Self { max_distance: DEFAULT_MAX_DISTANCE }
    }
}

impl PriorityNearestNeighbor {
    pub fn new(max_distance: f64) -> Self {
        Self { max_distance }
    }
}

impl RoutePlanner for PriorityNearestNeighbor {
    fn plan(
        &self,
        assignment: &VehicleAssignment,
        store:      &ParcelStore,
        graph:      &DistanceGraph,
        depot_key:  &str,
    ) -> DispatchResult<Route> {
        let mut tiers: Vec<Vec<ParcelId>> = assignment.tiers.clone();
        let mut stops = Vec::with_capacity(assignment.parcel_count());
        let mut from = depot_key.to_string();

        while let Some(tier) = tiers.iter_mut().find(|t| !t.is_empty()) {
            let index = nearest_neighbor(&from, tier, store, graph, self.max_distance)?
                .ok_or_else(|| DispatchError::NoReachableCandidate {
                    vehicle: assignment.vehicle,
                    from:    from.clone(),
                })?;
            let parcel = tier.remove(index);
            from = location_of(parcel, store)?;
            trace!(vehicle = %assignment.vehicle, %parcel, stop = stops.len(), "stop planned");
            stops.push(parcel);
        }

        debug!(vehicle = %assignment.vehicle, stops = stops.len(), "route planned");
        Ok(Route::new(assignment.vehicle, stops))
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Index of the candidate whose destination is nearest to `from_key`.
///
/// Only distances strictly below `max_distance` qualify; the first candidate
/// wins a tie.  Returns `Ok(None)` when nothing qualifies, including an
/// empty candidate list.
///
/// # Errors
///
/// [`DispatchError::UnknownParcel`] if a candidate is not in `store`;
/// [`DispatchError::Graph`] if a location is missing from `graph`.
pub fn nearest_neighbor(
    from_key:     &str,
    candidates:   &[ParcelId],
    store:        &ParcelStore,
    graph:        &DistanceGraph,
    max_distance: f64,
) -> DispatchResult<Option<usize>> {
    let mut best = max_distance;
    let mut best_index = None;
    for (i, &parcel) in candidates.iter().enumerate() {
        let miles = graph.distance(from_key, &location_of(parcel, store)?)?;
        if miles < best {
            best = miles;
            best_index = Some(i);
        }
    }
    Ok(best_index)
}

fn location_of(parcel: ParcelId, store: &ParcelStore) -> DispatchResult<String> {
    store
        .get(parcel)
        .map(|p| p.location_key())
        .ok_or(DispatchError::UnknownParcel(parcel))
}
