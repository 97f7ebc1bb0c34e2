//! `ParcelStore` — direct-addressed parcel storage.
//!
//! # Layout
//!
//! Slot `i` holds the parcel whose id is `i`:
//!
//! ```ignore
//! let parcel = store.get(ParcelId(9));  // slots[9], O(1)
//! ```
//!
//! Identifiers are small and dense, so a plain `Vec<Option<Parcel>>` beats
//! any hashing scheme.  Inserting an id at or past `capacity()` grows the
//! slot vector by doubling until the id fits; every existing slot keeps its
//! index, so growth never re-keys a parcel.

use tracing::debug;

use dlv_core::ParcelId;

use crate::Parcel;

/// Slot count for a 40-parcel day (ids 1..=40, slot 0 unused).
pub const DEFAULT_CAPACITY: usize = 41;

/// Parcels addressed directly by [`ParcelId`].
#[derive(Debug, Clone)]
pub struct ParcelStore {
    slots: Vec<Option<Parcel>>,
    /// Cached occupied-slot count for O(1) `len()`.
    len:   usize,
}

impl Default for ParcelStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ParcelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store able to hold ids `0..capacity` without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            len:   0,
        }
    }

    /// Build a store holding a fresh copy of every parcel in `parcels`.
    ///
    /// This is the per-query reload: statuses and addresses come back to
    /// their dataset values.
    pub fn from_parcels(parcels: &[Parcel]) -> Self {
        let mut store = Self::default();
        for parcel in parcels {
            store.insert(parcel.clone());
        }
        store
    }

    /// Store `parcel` in its slot, replacing any previous occupant.
    ///
    /// Returns the replaced parcel, if any.
    pub fn insert(&mut self, parcel: Parcel) -> Option<Parcel> {
        let index = parcel.id().index();
        if index >= self.slots.len() {
            self.grow(index);
        }
        let previous = self.slots[index].replace(parcel);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// The parcel with `id`, or `None` for an empty or out-of-range slot.
    #[inline]
    pub fn get(&self, id: ParcelId) -> Option<&Parcel> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ParcelId) -> Option<&mut Parcel> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    #[inline]
    pub fn contains(&self, id: ParcelId) -> bool {
        self.get(id).is_some()
    }

    /// Clear the slot for `id`.  No-op when `id` is out of range.
    pub fn remove(&mut self, id: ParcelId) -> Option<Parcel> {
        let removed = self.slots.get_mut(id.index()).and_then(Option::take);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Number of stored parcels.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of addressable slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Stored parcels in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Parcel> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Double the slot count until `index` fits, moving every slot across.
    fn grow(&mut self, index: usize) {
        let old_capacity = self.slots.len();
        let mut new_capacity = old_capacity.max(1);
        while index >= new_capacity {
            new_capacity *= 2;
        }

        let mut slots: Vec<Option<Parcel>> = Vec::with_capacity(new_capacity);
        slots.extend(self.slots.drain(..));
        slots.resize_with(new_capacity, || None);
        self.slots = slots;

        debug!(old_capacity, new_capacity, "parcel store grew");
    }
}
