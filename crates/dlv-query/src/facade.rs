//! The query façade over a [`Sim`].

use std::path::Path;

use tracing::{info, warn};

use dlv_dispatch::{PriorityNearestNeighbor, RoutePlanner};
use dlv_graph::load_distances_csv;
use dlv_sim::{NoopObserver, ReplayObserver, Sim, SimBuilder, SimConfig};
use dlv_store::load_parcels_csv;

use crate::{MileageSummary, QueryError, QueryKind, QueryRequest, QueryResult, Report};

/// Owns the simulation context and turns requests into reports.
///
/// Every request replays the whole day up to its time, so requests can be
/// issued in any order and repeated with identical results.
pub struct QueryFacade<P: RoutePlanner = PriorityNearestNeighbor> {
    sim: Sim<P>,
}

impl QueryFacade<PriorityNearestNeighbor> {
    /// Load both datasets and build a simulation with the default planner.
    pub fn load(packages: &Path, distances: &Path, config: SimConfig) -> QueryResult<Self> {
        let parcels = load_parcels_csv(packages)?;
        let graph = load_distances_csv(distances)?;
        let sim = SimBuilder::new(config, parcels, graph).build()?;
        Ok(Self::new(sim))
    }
}

impl<P: RoutePlanner> QueryFacade<P> {
    pub fn new(sim: Sim<P>) -> Self {
        Self { sim }
    }

    /// Answer `request`.
    pub fn query(&mut self, request: &QueryRequest) -> QueryResult<Report> {
        self.query_with(request, &mut NoopObserver)
    }

    /// Answer `request`, reporting the replay to `observer`.
    ///
    /// # Errors
    ///
    /// [`QueryError::ParcelNotFound`] for a single-parcel request naming an
    /// id outside the dataset; checked before any state is touched.
    pub fn query_with<O: ReplayObserver>(
        &mut self,
        request:  &QueryRequest,
        observer: &mut O,
    ) -> QueryResult<Report> {
        if let QueryKind::Single(id) = request.kind {
            if !self.sim.dataset.iter().any(|p| p.id() == id) {
                warn!(parcel = %id, "query for unknown parcel");
                return Err(QueryError::ParcelNotFound(id));
            }
        }

        let outcome = self.sim.run_at(request.time, observer)?;
        let parcels = match request.kind {
            QueryKind::Single(id) => self.sim.store.get(id).cloned().into_iter().collect(),
            QueryKind::All => self.sim.store.iter().cloned().collect(),
            QueryKind::Mileage => Vec::new(),
        };
        info!(time = %request.time, kind = ?request.kind, rows = parcels.len(), "query answered");

        Ok(Report {
            query_time: outcome.query_time,
            parcels,
            mileage:    MileageSummary::from_vehicles(&self.sim.vehicles),
            notes:      outcome.notes,
        })
    }

    /// The underlying simulation, as left by the last request.
    pub fn sim(&self) -> &Sim<P> {
        &self.sim
    }
}
