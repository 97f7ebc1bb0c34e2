//! Query reports and their text rendering.
//!
//! ```text
//!   ID | Address                                       | City                 | State |   Zip | Weight | Deadline | Status
//!    9 | 300 State St                                  | Salt Lake City       |    UT | 84103 | 2      | EOD      | at hub
//!
//! Truck one miles:    15.6
//! Truck two miles:    0.0
//! Truck three miles:  0.0
//! Total miles driven: 15.6
//! ```
//!
//! Column widths are cosmetic; nothing parses this output.

use std::fmt;

use dlv_core::{ClockTime, VehicleId};
use dlv_sim::Vehicle;
use dlv_store::Parcel;

// ── MileageSummary ────────────────────────────────────────────────────────────

/// Per-vehicle and total mileage after a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct MileageSummary {
    pub vehicles: Vec<(VehicleId, f64)>,
}

impl MileageSummary {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        Self { vehicles: vehicles.iter().map(|v| (v.id, v.miles)).collect() }
    }

    pub fn total(&self) -> f64 {
        self.vehicles.iter().map(|&(_, miles)| miles).sum()
    }

    /// Miles driven by `vehicle`, if it is in the fleet.
    pub fn miles(&self, vehicle: VehicleId) -> Option<f64> {
        self.vehicles
            .iter()
            .find(|&&(id, _)| id == vehicle)
            .map(|&(_, miles)| miles)
    }
}

impl fmt::Display for MileageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(id, miles) in &self.vehicles {
            let label = format!("Truck {} miles:", id.word());
            writeln!(f, "{label:<20}{miles:.1}")?;
        }
        write!(f, "{:<20}{:.1}", "Total miles driven:", self.total())
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// The answer to one [`QueryRequest`][crate::QueryRequest].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub query_time: ClockTime,
    /// Parcel rows, in id order.  Empty for a mileage-only query.
    pub parcels:    Vec<Parcel>,
    pub mileage:    MileageSummary,
    /// Notes raised by the replay, in the order raised.
    pub notes:      Vec<String>,
}

impl Report {
    pub fn total_miles(&self) -> f64 {
        self.mileage.total()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.notes {
            writeln!(f, "{note}")?;
        }
        if !self.parcels.is_empty() {
            writeln!(
                f,
                "{:>4} | {:<45} | {:<20} | {:>5} | {:>5} | {:<6} | {:<8} | {}",
                "ID", "Address", "City", "State", "Zip", "Weight", "Deadline", "Status"
            )?;
            for parcel in &self.parcels {
                write_row(f, parcel)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.mileage)
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, parcel: &Parcel) -> fmt::Result {
    let address = parcel.address();
    writeln!(
        f,
        "{:>4} | {:<45} | {:<20} | {:>5} | {:>5} | {:<6} | {:<8} | {}",
        parcel.id().0,
        address.street,
        address.city,
        address.state,
        address.zip,
        parcel.weight(),
        parcel.deadline().to_string(),
        parcel.status(),
    )
}
