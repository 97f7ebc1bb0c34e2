//! The `Sim` struct and its per-query replay.

use tracing::{debug, info};

use dlv_core::{ClockTime, VehicleId};
use dlv_dispatch::{Route, RoutePlanner};
use dlv_graph::DistanceGraph;
use dlv_store::{Parcel, ParcelStore};

use crate::{replay_vehicle, ReplayObserver, SimConfig, SimError, SimResult, Vehicle};

// ── ReplayOutcome ─────────────────────────────────────────────────────────────

/// Summary of one [`Sim::run_at`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub query_time:  ClockTime,
    /// Fleet mileage after the replay.
    pub total_miles: f64,
    /// Informational notes raised during the replay.
    pub notes:       Vec<String>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// Simulation context for one delivery day.
///
/// Owns the authoritative dataset, the distance graph, the dispatch table
/// and the mutable replay state.  Every [`run_at`][Self::run_at] rebuilds
/// that state from scratch, so queries are independent of each other and of
/// their order:
///
/// 1. **Reset** every vehicle to the depot at `day_start`.
/// 2. **Reload** the parcel store from the dataset.
/// 3. **Route** each vehicle with the planner.
/// 4. **Correct** the configured address, or report it as already applied.
/// 5. **Replay** vehicles in table order; a waiting vehicle's departure is
///    derived from those already replayed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: RoutePlanner> {
    /// Dispatch table and constants.
    pub config: SimConfig,

    /// Parcels as loaded; never mutated.
    pub dataset: Vec<Parcel>,

    /// Read-only distance table.
    pub graph: DistanceGraph,

    /// Stop-sequencing strategy.
    pub planner: P,

    /// Parcel state as of the last replay.
    pub store: ParcelStore,

    /// One vehicle per row of `config.vehicles`, same order.
    pub vehicles: Vec<Vehicle>,

    /// Routes planned by the last replay, same order as `vehicles`.
    pub routes: Vec<Route>,
}

impl<P: RoutePlanner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Rebuild all state and replay the day up to `query`.
    ///
    /// Calls observer hooks throughout.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_at<O: ReplayObserver>(
        &mut self,
        query:    ClockTime,
        observer: &mut O,
    ) -> SimResult<ReplayOutcome> {
        observer.on_query_start(query);
        let mut notes = Vec::new();

        // ── ① Reset + ② reload ────────────────────────────────────────────
        for vehicle in &mut self.vehicles {
            vehicle.reset(&self.config.depot, self.config.day_start);
        }
        self.store = ParcelStore::from_parcels(&self.dataset);

        // ── ③ Route ───────────────────────────────────────────────────────
        self.routes.clear();
        for (assignment, vehicle) in self.config.vehicles.iter().zip(&mut self.vehicles) {
            let route = self
                .planner
                .plan(assignment, &self.store, &self.graph, &self.config.depot)?;
            vehicle.route.clone_from(&route.stops);
            vehicle.set_departure(assignment.departure);
            observer.on_route_planned(&route);
            self.routes.push(route);
        }

        // ── ④ Address correction ──────────────────────────────────────────
        if let Some(correction) = &self.config.address_correction {
            if correction.applies_at(query) {
                self.store
                    .get_mut(correction.parcel)
                    .ok_or(SimError::UnknownParcel(correction.parcel))?
                    .change_address(correction.address.clone());
                debug!(parcel = %correction.parcel, "destination corrected");
            } else {
                observer.on_note(&correction.note);
                notes.push(correction.note.clone());
            }
        }

        // ── ⑤ Replay ──────────────────────────────────────────────────────
        for i in 0..self.vehicles.len() {
            let assignment = &self.config.vehicles[i];
            if assignment.is_dependent() {
                let returns = assignment
                    .waits_for
                    .iter()
                    .map(|&id| self.vehicle(id).and_then(Vehicle::return_time));
                let departure = self.config.dependent_departure.resolve(
                    assignment.departure,
                    returns,
                    self.config.end_of_day,
                );
                debug!(vehicle = %assignment.vehicle, %departure, "dependent departure resolved");
                self.vehicles[i].set_departure(departure);
            }

            replay_vehicle(
                &mut self.vehicles[i],
                &mut self.store,
                &self.graph,
                &self.config.depot,
                self.config.speed_mph,
                query,
                observer,
            )?;
        }

        observer.on_query_end(query, &self.vehicles);
        let total_miles = self.total_miles();
        info!(%query, total_miles, "query replayed");
        Ok(ReplayOutcome { query_time: query, total_miles, notes })
    }

    /// State of `id` after the last replay.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Sum of every vehicle's mileage.
    pub fn total_miles(&self) -> f64 {
        self.vehicles.iter().map(|v| v.miles).sum()
    }
}
