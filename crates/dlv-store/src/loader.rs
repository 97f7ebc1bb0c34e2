//! CSV parcel dataset loader.
//!
//! # CSV format
//!
//! One row per parcel, with a header row:
//!
//! ```csv
//! id,address,city,state,zip,deadline,weight,notes
//! 1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,
//! 6,3060 Lester St,West Valley City,UT,84119,10:30 AM,88,Delayed on flight---will not arrive to depot until 9:05 am
//! 14,4300 S 1300 E,Millcreek,UT,84117,10:30 AM,88,"Must be delivered with 15, 19"
//! ```
//!
//! **`deadline`** is `EOD` or a 12-hour time.  Notes starting with
//! `Delayed on flight` give the parcel an initial `EnRouteToHub` status.
//!
//! Any row with the wrong field count, a non-numeric id or weight, an id of
//! zero, a duplicate id, or an unreadable deadline fails the whole load.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use dlv_core::ParcelId;

use crate::parcel::{Address, Deadline, Parcel};
use crate::StoreError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ParcelRecord {
    id:       u32,
    address:  String,
    city:     String,
    state:    String,
    zip:      String,
    deadline: String,
    weight:   u32,
    notes:    String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the parcel dataset from a CSV file.
///
/// Returns parcels in file order.  Feed them to
/// [`ParcelStore::from_parcels`][crate::ParcelStore::from_parcels] to build
/// a store.
pub fn load_parcels_csv(path: &Path) -> Result<Vec<Parcel>, StoreError> {
    let file = std::fs::File::open(path)
        .map_err(StoreError::Io)?;
    load_parcels_reader(file)
}

/// Like [`load_parcels_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for datasets embedded
/// with `include_str!`.
pub fn load_parcels_reader<R: Read>(reader: R) -> Result<Vec<Parcel>, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut parcels = Vec::new();
    let mut seen: FxHashSet<u32> = FxHashSet::default();

    for (row, result) in csv_reader.deserialize::<ParcelRecord>().enumerate() {
        // Header is line 1.
        let fallback_line = row as u64 + 2;
        let record = result.map_err(|e| StoreError::Malformed {
            line:   e.position().map_or(fallback_line, |p| p.line()),
            reason: e.to_string(),
        })?;

        if record.id == 0 {
            return Err(malformed(fallback_line, "parcel id must be positive"));
        }
        if !seen.insert(record.id) {
            return Err(malformed(fallback_line, format!("duplicate parcel id {}", record.id)));
        }
        let deadline = Deadline::parse(&record.deadline)
            .map_err(|e| malformed(fallback_line, format!("deadline: {e}")))?;

        parcels.push(Parcel::new(
            ParcelId(record.id),
            Address::new(record.address, record.city, record.state, record.zip),
            deadline,
            record.weight,
            record.notes,
        ));
    }

    debug!(count = parcels.len(), "loaded parcel dataset");
    Ok(parcels)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn malformed(line: u64, reason: impl Into<String>) -> StoreError {
    StoreError::Malformed { line, reason: reason.into() }
}
