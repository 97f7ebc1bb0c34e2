//! The per-vehicle row of the assignment table.

use serde::{Deserialize, Serialize};

use dlv_core::{ClockTime, ParcelId, VehicleId};

/// What one vehicle carries and when it leaves.
///
/// `tiers[0]` is the highest priority; a tier is only drawn from once every
/// tier before it is empty.  Tiers are fixed configuration, not derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAssignment {
    pub vehicle:   VehicleId,
    pub tiers:     Vec<Vec<ParcelId>>,
    /// Configured departure.  For a vehicle that waits on others this is
    /// the earliest it may leave.
    pub departure: ClockTime,
    /// Vehicles whose return to the depot releases this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waits_for: Vec<VehicleId>,
}

impl VehicleAssignment {
    pub fn new(vehicle: VehicleId, tiers: Vec<Vec<ParcelId>>, departure: ClockTime) -> Self {
        Self { vehicle, tiers, departure, waits_for: Vec::new() }
    }

    /// Builder-style setter for [`waits_for`][Self::waits_for].
    pub fn waiting_for(mut self, vehicles: impl IntoIterator<Item = VehicleId>) -> Self {
        self.waits_for = vehicles.into_iter().collect();
        self
    }

    /// Every assigned parcel, tier by tier.
    pub fn parcels(&self) -> impl Iterator<Item = ParcelId> + '_ {
        self.tiers.iter().flatten().copied()
    }

    /// Total number of assigned parcels.
    pub fn parcel_count(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn is_dependent(&self) -> bool {
        !self.waits_for.is_empty()
    }
}
