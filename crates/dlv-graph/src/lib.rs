//! `dlv-graph` — distances between named delivery locations.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `DistanceGraph`, `DistanceGraphBuilder`, `DEPOT_KEY`      |
//! | [`loader`] | `load_distances_csv`, `load_distances_reader`             |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |
//!
//! # Symmetry
//!
//! Source tables are usually triangular: only one of `(i, j)` / `(j, i)` is
//! filled in.  [`DistanceGraph::distance`] reads the direct cell and falls
//! back to the transposed one, so lookups are symmetric whichever half is
//! stored.

pub mod error;
pub mod graph;
pub mod loader;


pub use error::{GraphError, GraphResult};
pub use graph::{DistanceGraph, DistanceGraphBuilder, DEPOT_KEY};
pub use loader::{load_distances_csv, load_distances_reader};
