//! Parcel records and their delivery status.

use std::fmt;

use serde::{Deserialize, Serialize};

use dlv_core::{ClockTime, CoreResult, ParcelId, VehicleId};

/// Notes prefix marking a parcel that has not reached the depot yet.
pub const DELAYED_NOTE_PREFIX: &str = "Delayed on flight";

// ── Address ───────────────────────────────────────────────────────────────────

/// A delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city:   String,
    pub state:  String,
    pub zip:    String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city:   impl Into<String>,
        state:  impl Into<String>,
        zip:    impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city:   city.into(),
            state:  state.into(),
            zip:    zip.into(),
        }
    }

    /// Key of this address in the distance table: `"{street} ({zip})"`.
    pub fn location_key(&self) -> String {
        format!("{} ({})", self.street, self.zip)
    }
}

// ── Deadline ──────────────────────────────────────────────────────────────────

/// Latest acceptable delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// `EOD` in the dataset.
    EndOfDay,
    By(ClockTime),
}

impl Deadline {
    /// Parse `EOD` or a 12-hour time such as `10:30 AM`.
    pub fn parse(s: &str) -> CoreResult<Self> {
        if s.trim().eq_ignore_ascii_case("EOD") {
            return Ok(Deadline::EndOfDay);
        }
        ClockTime::parse_meridiem(s).map(Deadline::By)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::EndOfDay => f.write_str("EOD"),
            Deadline::By(t) => f.write_str(&t.to_meridiem()),
        }
    }
}

// ── DeliveryStatus ────────────────────────────────────────────────────────────

/// Where a parcel is as of the most recent replay.
///
/// `Display` reproduces the wording shown on status reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// Waiting at the depot.
    AtHub,
    /// Not yet at the depot (late inbound flight).
    EnRouteToHub,
    /// On board `vehicle`, which has departed.
    Loaded(VehicleId),
    Delivered { at: ClockTime, vehicle: VehicleId },
}

impl DeliveryStatus {
    #[inline]
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered { .. })
    }

    /// Delivery time, if delivered.
    pub fn delivered_at(&self) -> Option<ClockTime> {
        match self {
            DeliveryStatus::Delivered { at, .. } => Some(*at),
            _ => None,
        }
    }

    /// Vehicle carrying or having delivered the parcel.
    pub fn vehicle(&self) -> Option<VehicleId> {
        match self {
            DeliveryStatus::Loaded(v) | DeliveryStatus::Delivered { vehicle: v, .. } => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::AtHub => f.write_str("at hub"),
            DeliveryStatus::EnRouteToHub => f.write_str("in route to hub"),
            DeliveryStatus::Loaded(v) => write!(f, "Loaded in truck {}", v.word()),
            DeliveryStatus::Delivered { at, vehicle } => {
                write!(f, "Truck {} delivered at: {at}", capitalize(&vehicle.word()))
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Parcel ────────────────────────────────────────────────────────────────────

/// One parcel from the dataset.
///
/// `id` and `weight` are fixed at construction; the address can be corrected
/// and the status moves through a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    id:       ParcelId,
    address:  Address,
    deadline: Deadline,
    weight:   u32,
    notes:    String,
    status:   DeliveryStatus,
}

impl Parcel {
    /// Create a parcel with its initial status derived from `notes`.
    pub fn new(
        id:       ParcelId,
        address:  Address,
        deadline: Deadline,
        weight:   u32,
        notes:    impl Into<String>,
    ) -> Self {
        let notes = notes.into();
        let status = if notes.starts_with(DELAYED_NOTE_PREFIX) {
            DeliveryStatus::EnRouteToHub
        } else {
            DeliveryStatus::AtHub
        };
        Self { id, address, deadline, weight, notes, status }
    }

    #[inline]
    pub fn id(&self) -> ParcelId {
        self.id
    }

    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[inline]
    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[inline]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[inline]
    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Distance-table key of the current destination.
    pub fn location_key(&self) -> String {
        self.address.location_key()
    }

    /// Replace the destination address.
    pub fn change_address(&mut self, address: Address) {
        self.address = address;
    }

    pub fn mark_loaded(&mut self, vehicle: VehicleId) {
        self.status = DeliveryStatus::Loaded(vehicle);
    }

    pub fn mark_delivered(&mut self, at: ClockTime, vehicle: VehicleId) {
        self.status = DeliveryStatus::Delivered { at, vehicle };
    }
}
