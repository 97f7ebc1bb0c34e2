use thiserror::Error;

use dlv_core::{ParcelId, VehicleId};
use dlv_graph::GraphError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no candidate for {vehicle} lies within range of {from:?}")]
    NoReachableCandidate {
        vehicle: VehicleId,
        from:    String,
    },

    #[error("{0} is assigned to a vehicle but missing from the parcel store")]
    UnknownParcel(ParcelId),

    #[error("distance lookup failed: {0}")]
    Graph(#[from] GraphError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
