//! Fluent builder for constructing a [`Sim`].

use rustc_hash::FxHashSet;

use dlv_core::{ParcelId, VehicleId};
use dlv_dispatch::{PriorityNearestNeighbor, RoutePlanner};
use dlv_graph::{DistanceGraph, GraphError};
use dlv_store::{Parcel, ParcelStore};

use crate::{Sim, SimConfig, SimError, SimResult, Vehicle};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: fleet table, speed and the special rules
/// - the parcel dataset, from [`dlv_store::load_parcels_csv`]
/// - the [`DistanceGraph`], from [`dlv_graph::load_distances_csv`]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                                  |
/// |-----------------|----------------------------------------------------------|
/// | `.planner(p)`   | `PriorityNearestNeighbor` bounded by `max_candidate_distance` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::standard(), parcels, graph).build()?;
/// sim.run_at(ClockTime::from_hms(10, 0, 0), &mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: RoutePlanner> {
    config:  SimConfig,
    dataset: Vec<Parcel>,
    graph:   DistanceGraph,
    planner: P,
}

impl SimBuilder<PriorityNearestNeighbor> {
    /// Create a builder using the default planner.
    pub fn new(config: SimConfig, dataset: Vec<Parcel>, graph: DistanceGraph) -> Self {
        let planner = PriorityNearestNeighbor::new(config.max_candidate_distance);
        Self { config, dataset, graph, planner }
    }
}

impl<P: RoutePlanner> SimBuilder<P> {
    /// Replace the route planner.
    pub fn planner<Q: RoutePlanner>(self, planner: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:  self.config,
            dataset: self.dataset,
            graph:   self.graph,
            planner,
        }
    }

    /// Validate the configuration against the dataset and graph, and return
    /// a ready-to-query [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let config = &self.config;

        // ── Constants ─────────────────────────────────────────────────────
        if !(config.speed_mph.is_finite() && config.speed_mph > 0.0) {
            return Err(SimError::Config(format!(
                "speed_mph must be positive, got {}",
                config.speed_mph
            )));
        }
        if config.max_candidate_distance.is_nan() || config.max_candidate_distance <= 0.0 {
            return Err(SimError::Config(format!(
                "max_candidate_distance must be positive, got {}",
                config.max_candidate_distance
            )));
        }
        if config.end_of_day < config.day_start {
            return Err(SimError::Config(format!(
                "end_of_day {} precedes day_start {}",
                config.end_of_day, config.day_start
            )));
        }
        if self.graph.location(&config.depot).is_none() {
            return Err(GraphError::LocationNotFound(config.depot.clone()).into());
        }
        if config.vehicles.is_empty() {
            return Err(SimError::Config("dispatch table lists no vehicles".into()));
        }

        // ── Fleet table ───────────────────────────────────────────────────
        let known: FxHashSet<ParcelId> = self.dataset.iter().map(Parcel::id).collect();
        let mut routed: FxHashSet<ParcelId> = FxHashSet::default();
        let mut seen: Vec<VehicleId> = Vec::with_capacity(config.vehicles.len());

        for assignment in &config.vehicles {
            let vehicle = assignment.vehicle;
            if seen.contains(&vehicle) {
                return Err(SimError::Config(format!("{vehicle} appears twice")));
            }
            if assignment.departure < config.day_start {
                return Err(SimError::Config(format!(
                    "{vehicle} departs at {} before day_start {}",
                    assignment.departure, config.day_start
                )));
            }
            for &awaited in &assignment.waits_for {
                if !seen.contains(&awaited) {
                    return Err(SimError::Config(format!(
                        "{vehicle} waits for {awaited}, which is not replayed before it"
                    )));
                }
            }
            for parcel in assignment.parcels() {
                if !known.contains(&parcel) {
                    return Err(SimError::UnknownParcel(parcel));
                }
                if !routed.insert(parcel) {
                    return Err(SimError::Config(format!("{parcel} is assigned twice")));
                }
            }
            seen.push(vehicle);
        }

        if let Some(correction) = &config.address_correction {
            if !known.contains(&correction.parcel) {
                return Err(SimError::UnknownParcel(correction.parcel));
            }
        }

        // ── Initial state ─────────────────────────────────────────────────
        let vehicles = seen
            .iter()
            .map(|&id| Vehicle::new(id, &config.depot, config.day_start))
            .collect();
        let store = ParcelStore::from_parcels(&self.dataset);

        Ok(Sim {
            config:  self.config,
            dataset: self.dataset,
            graph:   self.graph,
            planner: self.planner,
            store,
            vehicles,
            routes:  Vec::new(),
        })
    }
}
