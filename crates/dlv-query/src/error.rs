use thiserror::Error;

use dlv_core::{CoreError, ParcelId};
use dlv_graph::GraphError;
use dlv_sim::SimError;
use dlv_store::StoreError;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{0} is not in the parcel dataset")]
    ParcelNotFound(ParcelId),

    #[error("invalid query time: {0}")]
    Time(#[from] CoreError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("parcel dataset: {0}")]
    Store(#[from] StoreError),

    #[error("distance table: {0}")]
    Graph(#[from] GraphError),
}

pub type QueryResult<T> = Result<T, QueryError>;
