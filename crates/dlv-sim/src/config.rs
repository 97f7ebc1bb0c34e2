//! Dispatch configuration: fleet table, constants, and the two special rules.
//!
//! Loaded from JSON by the application or taken from
//! [`SimConfig::standard`], which reproduces the bundled delivery day:
//!
//! ```json
//! {
//!   "depot": "HUB",
//!   "speed_mph": 18.0,
//!   "max_candidate_distance": 140.0,
//!   "day_start": "8:00:00",
//!   "end_of_day": "23:59:59",
//!   "dependent_departure": "earliest_return",
//!   "address_correction": { "parcel": 9, "cutoff": "10:20:00", "address": { … }, "note": "…" },
//!   "vehicles": [ { "vehicle": 1, "tiers": [[15], […], […]], "departure": "8:00:00" }, … ]
//! }
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dlv_core::{ClockTime, ParcelId, VehicleId};
use dlv_dispatch::VehicleAssignment;
use dlv_graph::DEPOT_KEY;
use dlv_store::Address;

use crate::SimResult;

// ── DependentDeparture ────────────────────────────────────────────────────────

/// How a waiting vehicle's departure follows from the vehicles it awaits.
///
/// With exactly one awaited vehicle back, both policies use its return
/// time.  With none back, the waiting vehicle is held until
/// [`SimConfig::end_of_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependentDeparture {
    /// Leave with the first crew back at the depot.
    #[default]
    EarliestReturn,
    /// Leave once every returned awaited vehicle is back.
    LatestReturn,
}

impl DependentDeparture {
    /// Effective departure given the awaited vehicles' return times
    /// (`None` = not back by the query time).
    ///
    /// Never earlier than `configured`.
    pub fn resolve(
        self,
        configured: ClockTime,
        returns:    impl IntoIterator<Item = Option<ClockTime>>,
        end_of_day: ClockTime,
    ) -> ClockTime {
        let back = returns.into_iter().flatten();
        let released = match self {
            DependentDeparture::EarliestReturn => back.min(),
            DependentDeparture::LatestReturn => back.max(),
        };
        match released {
            Some(t) => t.max(configured),
            None => end_of_day,
        }
    }
}

// ── AddressCorrection ─────────────────────────────────────────────────────────

/// A known-wrong destination fixed before routing.
///
/// Applied to queries strictly before `cutoff`.  From the cutoff on the
/// dataset address is taken as already updated and `note` is reported
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCorrection {
    pub parcel:  ParcelId,
    pub cutoff:  ClockTime,
    pub address: Address,
    pub note:    String,
}

impl AddressCorrection {
    #[inline]
    pub fn applies_at(&self, query: ClockTime) -> bool {
        query < self.cutoff
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Everything about a delivery day that is configuration rather than data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Distance-table key of the depot.
    #[serde(default = "default_depot")]
    pub depot: String,

    /// Constant vehicle speed.  18 mph = 0.005 miles per second.
    pub speed_mph: f64,

    /// Exclusive bound on a selectable leg when planning routes.
    #[serde(default = "default_max_candidate_distance")]
    pub max_candidate_distance: f64,

    /// Baseline every replay starts from.  No departure may precede it.
    pub day_start: ClockTime,

    /// Departure assigned to a waiting vehicle nobody has released.
    pub end_of_day: ClockTime,

    #[serde(default)]
    pub dependent_departure: DependentDeparture,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_correction: Option<AddressCorrection>,

    /// Fleet table, replayed in this order.
    pub vehicles: Vec<VehicleAssignment>,
}

fn default_depot() -> String {
    DEPOT_KEY.to_string()
}

fn default_max_candidate_distance() -> f64 {
    dlv_dispatch::DEFAULT_MAX_DISTANCE
}

fn tiers(raw: [&[u32]; 3]) -> Vec<Vec<ParcelId>> {
    raw.iter()
        .map(|t| t.iter().copied().map(ParcelId).collect())
        .collect()
}

impl SimConfig {
    /// The three-truck, forty-parcel day shipped in `data/`.
    pub fn standard() -> Self {
        Self {
            depot:                  default_depot(),
            speed_mph:              18.0,
            max_candidate_distance: default_max_candidate_distance(),
            day_start:              ClockTime::from_hms(8, 0, 0),
            end_of_day:             ClockTime::from_hms(23, 59, 59),
            dependent_departure:    DependentDeparture::EarliestReturn,
            address_correction:     Some(AddressCorrection {
                parcel:  ParcelId(9),
                cutoff:  ClockTime::from_hms(10, 20, 0),
                address: Address::new("300 State St", "Salt Lake City", "UT", "84103"),
                note:    "New address for package nine has been received and updated in the system."
                    .to_string(),
            }),
            vehicles: vec![
                VehicleAssignment::new(
                    VehicleId(1),
                    tiers([&[15], &[1, 13, 14, 16, 20, 29, 30, 31, 34, 37, 40], &[19, 21, 24]]),
                    ClockTime::from_hms(8, 0, 0),
                ),
                VehicleAssignment::new(
                    VehicleId(2),
                    tiers([&[], &[6, 25], &[3, 4, 8, 10, 11, 17, 18, 23, 28, 32, 33, 36, 38]]),
                    ClockTime::from_hms(9, 5, 0),
                ),
                VehicleAssignment::new(
                    VehicleId(3),
                    tiers([&[], &[], &[2, 5, 7, 9, 12, 22, 26, 27, 35, 39]]),
                    ClockTime::from_hms(10, 20, 0),
                )
                .waiting_for([VehicleId(1), VehicleId(2)]),
            ],
        }
    }

    /// Parse a config from JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a config from a JSON file.
    pub fn from_json_path(path: &Path) -> SimResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}
