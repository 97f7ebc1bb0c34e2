//! Plain data row types written by output backends.

use std::fmt;

use dlv_core::{ClockTime, ParcelId, VehicleId};

/// What happened in a [`DeliveryEventRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Depart,
    Deliver,
    Return,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Depart => "depart",
            EventKind::Deliver => "deliver",
            EventKind::Return => "return",
        })
    }
}

/// One vehicle event during a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryEventRow {
    pub query_time: ClockTime,
    pub vehicle:    VehicleId,
    pub event:      EventKind,
    /// Only set for `Deliver`.
    pub parcel:     Option<ParcelId>,
    pub time:       ClockTime,
    /// Distance-table key where the event happened.
    pub location:   String,
}

/// A vehicle's state at the end of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetMileageRow {
    pub query_time:    ClockTime,
    pub vehicle:       VehicleId,
    pub miles:         f64,
    pub returned:      bool,
    pub position_time: ClockTime,
}
