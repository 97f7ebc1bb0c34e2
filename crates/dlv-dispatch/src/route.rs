//! Planned stop order.

use dlv_core::{ParcelId, VehicleId};

/// The stops of one vehicle in delivery order.
///
/// Fixed once planned; a replay only ever truncates it at the query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub vehicle: VehicleId,
    pub stops:   Vec<ParcelId>,
}

impl Route {
    pub fn new(vehicle: VehicleId, stops: Vec<ParcelId>) -> Self {
        Self { vehicle, stops }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` for a vehicle with nothing to deliver.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Position of `parcel` in the stop order, if routed here.
    pub fn position(&self, parcel: ParcelId) -> Option<usize> {
        self.stops.iter().position(|&p| p == parcel)
    }
}
