//! Unit tests for dlv-store.

use dlv_core::{ClockTime, ParcelId, VehicleId};

use crate::{Address, Deadline, DeliveryStatus, Parcel, ParcelStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parcel(id: u32) -> Parcel {
    Parcel::new(
        ParcelId(id),
        Address::new("410 S State St", "Salt Lake City", "UT", "84111"),
        Deadline::EndOfDay,
        id * 2,
        "",
    )
}

const SAMPLE_CSV: &str = "\
id,address,city,state,zip,deadline,weight,notes\n\
1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,\n\
6,3060 Lester St,West Valley City,UT,84119,10:30 AM,88,Delayed on flight---will not arrive to depot until 9:05 am\n\
14,4300 S 1300 E,Millcreek,UT,84117,10:30 AM,88,\"Must be delivered with 15, 19\"\n\
22,6351 South 900 East,Murray,UT,84121,EOD,2,\n\
";

// ── Parcel ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parcel {
    use super::*;

    #[test]
    fn location_key_format() {
        assert_eq!(parcel(5).location_key(), "410 S State St (84111)");
    }

    #[test]
    fn delayed_notes_start_en_route() {
        let p = Parcel::new(
            ParcelId(6),
            Address::new("3060 Lester St", "West Valley City", "UT", "84119"),
            Deadline::By(ClockTime::from_hms(10, 30, 0)),
            88,
            "Delayed on flight---will not arrive to depot until 9:05 am",
        );
        assert_eq!(p.status(), DeliveryStatus::EnRouteToHub);
        assert_eq!(parcel(1).status(), DeliveryStatus::AtHub);
    }

    #[test]
    fn change_address_keeps_identity() {
        let mut p = parcel(9);
        p.change_address(Address::new("300 State St", "Salt Lake City", "UT", "84103"));
        assert_eq!(p.id(), ParcelId(9));
        assert_eq!(p.weight(), 18);
        assert_eq!(p.location_key(), "300 State St (84103)");
    }

    #[test]
    fn status_transitions() {
        let mut p = parcel(3);
        p.mark_loaded(VehicleId(2));
        assert_eq!(p.status().vehicle(), Some(VehicleId(2)));
        assert!(!p.status().is_delivered());

        p.mark_delivered(ClockTime::from_hms(9, 38, 20), VehicleId(2));
        assert!(p.status().is_delivered());
        assert_eq!(p.status().delivered_at(), Some(ClockTime::from_hms(9, 38, 20)));
    }

    #[test]
    fn status_display_text() {
        assert_eq!(DeliveryStatus::AtHub.to_string(), "at hub");
        assert_eq!(DeliveryStatus::EnRouteToHub.to_string(), "in route to hub");
        assert_eq!(DeliveryStatus::Loaded(VehicleId(1)).to_string(), "Loaded in truck one");
        let delivered = DeliveryStatus::Delivered {
            at:      ClockTime::from_hms(9, 38, 20),
            vehicle: VehicleId(3),
        };
        assert_eq!(delivered.to_string(), "Truck Three delivered at: 9:38:20");
    }

    #[test]
    fn deadline_round_trip_text() {
        assert_eq!(Deadline::parse("EOD").unwrap(), Deadline::EndOfDay);
        assert_eq!(Deadline::parse("9:00 AM").unwrap().to_string(), "9:00 AM");
        assert_eq!(Deadline::parse("10:30 AM").unwrap().to_string(), "10:30 AM");
        assert!(Deadline::parse("soon").is_err());
    }
}

// ── ParcelStore ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn insert_then_get() {
        let mut store = ParcelStore::new();
        for id in 1..=40 {
            store.insert(parcel(id));
        }
        assert_eq!(store.len(), 40);
        assert_eq!(store.capacity(), 41);
        for id in 1..=40 {
            assert_eq!(store.get(ParcelId(id)), Some(&parcel(id)));
        }
    }

    #[test]
    fn missing_ids_read_as_none() {
        let mut store = ParcelStore::new();
        store.insert(parcel(3));
        assert!(store.get(ParcelId(0)).is_none());
        assert!(store.get(ParcelId(4)).is_none());
        assert!(store.get(ParcelId(10_000)).is_none());
    }

    #[test]
    fn growth_preserves_existing_entries() {
        let mut store = ParcelStore::with_capacity(8);
        for id in 1..=7 {
            store.insert(parcel(id));
        }
        store.insert(parcel(50));

        assert_eq!(store.capacity(), 64, "8 doubles to 64 to fit id 50");
        assert_eq!(store.len(), 8);
        for id in 1..=7 {
            assert_eq!(store.get(ParcelId(id)), Some(&parcel(id)));
        }
        assert_eq!(store.get(ParcelId(50)), Some(&parcel(50)));
    }

    #[test]
    fn growth_at_exact_capacity() {
        let mut store = ParcelStore::with_capacity(41);
        store.insert(parcel(41));
        assert_eq!(store.capacity(), 82);
        assert!(store.contains(ParcelId(41)));
    }

    #[test]
    fn insert_replaces_occupant() {
        let mut store = ParcelStore::new();
        assert!(store.insert(parcel(2)).is_none());
        let mut updated = parcel(2);
        updated.mark_loaded(VehicleId(1));
        let previous = store.insert(updated.clone());
        assert_eq!(previous, Some(parcel(2)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ParcelId(2)), Some(&updated));
    }

    #[test]
    fn remove_clears_slot() {
        let mut store = ParcelStore::new();
        store.insert(parcel(5));
        assert_eq!(store.remove(ParcelId(5)), Some(parcel(5)));
        assert!(store.get(ParcelId(5)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = ParcelStore::new();
        store.insert(parcel(5));
        assert!(store.remove(ParcelId(999)).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.capacity(), 41);
    }

    #[test]
    fn iter_in_id_order() {
        let mut store = ParcelStore::new();
        for id in [30, 2, 17, 9] {
            store.insert(parcel(id));
        }
        let ids: Vec<u32> = store.iter().map(|p| p.id().0).collect();
        assert_eq!(ids, vec![2, 9, 17, 30]);
    }

    #[test]
    fn from_parcels_resets_state() {
        let dataset = vec![parcel(1), parcel(2)];
        let mut store = ParcelStore::from_parcels(&dataset);
        store.get_mut(ParcelId(1)).unwrap().mark_loaded(VehicleId(1));

        let fresh = ParcelStore::from_parcels(&dataset);
        assert_eq!(fresh.get(ParcelId(1)).unwrap().status(), DeliveryStatus::AtHub);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{load_parcels_csv, load_parcels_reader, StoreError};

    #[test]
    fn parses_sample_rows() {
        let parcels = load_parcels_reader(Cursor::new(SAMPLE_CSV)).unwrap();
        assert_eq!(parcels.len(), 4);

        let first = &parcels[0];
        assert_eq!(first.id(), ParcelId(1));
        assert_eq!(first.address().street, "195 W Oakland Ave");
        assert_eq!(first.deadline(), Deadline::By(ClockTime::from_hms(10, 30, 0)));
        assert_eq!(first.weight(), 21);
        assert_eq!(first.notes(), "");

        assert_eq!(parcels[1].status(), DeliveryStatus::EnRouteToHub);
        assert_eq!(parcels[2].notes(), "Must be delivered with 15, 19");
        assert_eq!(parcels[3].deadline(), Deadline::EndOfDay);
    }

    #[test]
    fn wrong_arity_fails() {
        let csv = "id,address,city,state,zip,deadline,weight,notes\n1,195 W Oakland Ave,Salt Lake City,UT\n";
        assert!(matches!(
            load_parcels_reader(Cursor::new(csv)),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn non_numeric_weight_fails() {
        let csv = "id,address,city,state,zip,deadline,weight,notes\n1,A St,City,UT,84115,EOD,heavy,\n";
        assert!(matches!(
            load_parcels_reader(Cursor::new(csv)),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn bad_deadline_reports_line() {
        let csv = "id,address,city,state,zip,deadline,weight,notes\n1,A St,City,UT,84115,EOD,1,\n2,B St,City,UT,84115,noonish,1,\n";
        match load_parcels_reader(Cursor::new(csv)) {
            Err(StoreError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_and_zero_ids_fail() {
        let dup = "id,address,city,state,zip,deadline,weight,notes\n1,A,C,UT,1,EOD,1,\n1,B,C,UT,1,EOD,1,\n";
        assert!(load_parcels_reader(Cursor::new(dup)).is_err());
        let zero = "id,address,city,state,zip,deadline,weight,notes\n0,A,C,UT,1,EOD,1,\n";
        assert!(load_parcels_reader(Cursor::new(zero)).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let parcels = load_parcels_csv(file.path()).unwrap();
        assert_eq!(parcels.len(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_parcels_csv(std::path::Path::new("/nonexistent/packages.csv"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn bundled_dataset_loads() {
        let parcels =
            load_parcels_reader(Cursor::new(include_str!("../../../data/packages.csv"))).unwrap();
        assert_eq!(parcels.len(), 40);
        let store = ParcelStore::from_parcels(&parcels);
        assert_eq!(store.iter().count(), 40);
        assert_eq!(
            store.iter().filter(|p| p.status() == DeliveryStatus::EnRouteToHub).count(),
            4
        );
    }
}
