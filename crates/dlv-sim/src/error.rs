use thiserror::Error;

use dlv_core::ParcelId;
use dlv_dispatch::DispatchError;
use dlv_graph::GraphError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{0} is referenced by the dispatch table but not in the dataset")]
    UnknownParcel(ParcelId),

    #[error("route planning failed: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("distance lookup failed: {0}")]
    Graph(#[from] GraphError),

    #[error("invalid dispatch config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
