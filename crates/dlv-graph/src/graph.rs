//! Distance table representation and builder.
//!
//! # Data layout
//!
//! Locations are numbered in insertion order (`LocationId`), and distances
//! live in a dense row-major `n × n` matrix of `Option<f64>`:
//!
//! ```text
//! cells[ from * n + to ]
//! ```
//!
//! `None` marks an unset cell.  A hash index maps each human-readable key
//! (`"410 S State St (84111)"`, or [`DEPOT_KEY`]) to its `LocationId`.

use rustc_hash::FxHashMap;

use dlv_core::LocationId;

use crate::{GraphError, GraphResult};

/// Key of the depot row in the distance table.
pub const DEPOT_KEY: &str = "HUB";

// ── DistanceGraph ─────────────────────────────────────────────────────────────

/// Symmetric distance lookup over named locations, in miles.
///
/// Immutable once built.  Use [`DistanceGraphBuilder`] or
/// [`load_distances_csv`][crate::load_distances_csv].
#[derive(Debug, Clone)]
pub struct DistanceGraph {
    /// Location keys, indexed by `LocationId`.
    keys:  Vec<String>,
    /// Reverse index: key → `LocationId`.
    index: FxHashMap<String, LocationId>,
    /// Row-major `len × len` matrix.
    cells: Vec<Option<f64>>,
}

impl DistanceGraph {
    /// A graph with no locations.
    pub fn empty() -> Self {
        DistanceGraphBuilder::new().build()
    }

    /// Number of locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Location keys in `LocationId` order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Resolve a key to its `LocationId`.
    #[inline]
    pub fn location(&self, key: &str) -> Option<LocationId> {
        self.index.get(key).copied()
    }

    /// The key of `id`, if in range.
    pub fn key(&self, id: LocationId) -> Option<&str> {
        self.keys.get(id.index()).map(String::as_str)
    }

    /// Distance in miles between two location keys.
    ///
    /// # Errors
    ///
    /// [`GraphError::LocationNotFound`] if either key is unknown;
    /// [`GraphError::MissingDistance`] if neither `(a, b)` nor `(b, a)` is
    /// set.
    pub fn distance(&self, a: &str, b: &str) -> GraphResult<f64> {
        let from = self
            .location(a)
            .ok_or_else(|| GraphError::LocationNotFound(a.to_string()))?;
        let to = self
            .location(b)
            .ok_or_else(|| GraphError::LocationNotFound(b.to_string()))?;
        self.distance_between(from, to)
    }

    /// Distance in miles between two resolved locations.
    pub fn distance_between(&self, from: LocationId, to: LocationId) -> GraphResult<f64> {
        let n = self.len();
        for id in [from, to] {
            if id.index() >= n {
                return Err(GraphError::LocationNotFound(id.to_string()));
            }
        }
        self.cell(from, to)
            .or_else(|| self.cell(to, from))
            .ok_or_else(|| GraphError::MissingDistance {
                from: self.keys[from.index()].clone(),
                to:   self.keys[to.index()].clone(),
            })
    }

    #[inline]
    fn cell(&self, from: LocationId, to: LocationId) -> Option<f64> {
        self.cells[from.index() * self.len() + to.index()]
    }
}

// ── DistanceGraphBuilder ──────────────────────────────────────────────────────

/// Incrementally builds a [`DistanceGraph`].
///
/// ```rust,ignore
/// let mut b = DistanceGraphBuilder::new();
/// let hub = b.add_location(DEPOT_KEY);
/// let stop = b.add_location("410 S State St (84111)");
/// b.set_distance(hub, stop, 6.5);
/// let graph = b.build();
/// ```
#[derive(Debug, Default)]
pub struct DistanceGraphBuilder {
    keys:    Vec<String>,
    index:   FxHashMap<String, LocationId>,
    entries: Vec<(LocationId, LocationId, f64)>,
}

impl DistanceGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`, returning its id.  Re-adding a key returns the
    /// existing id.
    pub fn add_location(&mut self, key: impl Into<String>) -> LocationId {
        let key = key.into();
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = LocationId(self.keys.len() as u32);
        self.index.insert(key.clone(), id);
        self.keys.push(key);
        id
    }

    /// Whether `key` has already been registered.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Record the distance in the `(from, to)` cell only.  Lookups of
    /// `(to, from)` fall back to it.
    pub fn set_distance(&mut self, from: LocationId, to: LocationId, miles: f64) {
        self.entries.push((from, to, miles));
    }

    /// Freeze into a [`DistanceGraph`].  Entries referring to unknown ids
    /// are dropped; later entries for the same cell win.
    pub fn build(self) -> DistanceGraph {
        let n = self.keys.len();
        let mut cells = vec![None; n * n];
        for (from, to, miles) in self.entries {
            if from.index() < n && to.index() < n {
                cells[from.index() * n + to.index()] = Some(miles);
            }
        }
        DistanceGraph {
            keys:  self.keys,
            index: self.index,
            cells,
        }
    }
}
