//! Unit tests for dlv-dispatch.

use std::io::Cursor;

use dlv_core::{ClockTime, ParcelId, VehicleId};
use dlv_graph::{load_distances_reader, DistanceGraph, DEPOT_KEY};
use dlv_store::{load_parcels_reader, Address, Deadline, Parcel, ParcelStore};

use crate::{
    nearest_neighbor, DispatchError, PriorityNearestNeighbor, RoutePlanner, VehicleAssignment,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ids(raw: &[u32]) -> Vec<ParcelId> {
    raw.iter().copied().map(ParcelId).collect()
}

fn bundled() -> (ParcelStore, DistanceGraph) {
    let parcels =
        load_parcels_reader(Cursor::new(include_str!("../../../data/packages.csv"))).unwrap();
    let graph =
        load_distances_reader(Cursor::new(include_str!("../../../data/distances.csv"))).unwrap();
    (ParcelStore::from_parcels(&parcels), graph)
}

/// HUB plus three stops on a line: A at 1 mi, B at 2 mi, C at 2 mi.
fn line_graph() -> DistanceGraph {
    load_distances_reader(Cursor::new(
        "location,HUB,A (1),B (2),C (3)\n\
         HUB,0,,,\n\
         A (1),1,0,,\n\
         B (2),2,1,0,\n\
         C (3),2,3,4,0\n",
    ))
    .unwrap()
}

fn line_store() -> ParcelStore {
    let mut store = ParcelStore::new();
    for (id, street, zip) in [(1, "A", "1"), (2, "B", "2"), (3, "C", "3")] {
        store.insert(Parcel::new(
            ParcelId(id),
            Address::new(street, "Town", "UT", zip),
            Deadline::EndOfDay,
            1,
            "",
        ));
    }
    store
}

fn truck(n: u32, tiers: &[&[u32]], departure: ClockTime) -> VehicleAssignment {
    VehicleAssignment::new(VehicleId(n), tiers.iter().map(|t| ids(t)).collect(), departure)
}

// ── nearest_neighbor ──────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn picks_closest() {
        let (store, graph) = (line_store(), line_graph());
        let got = nearest_neighbor(DEPOT_KEY, &ids(&[2, 1, 3]), &store, &graph, 140.0).unwrap();
        assert_eq!(got, Some(1));
    }

    #[test]
    fn first_candidate_wins_tie() {
        let (store, graph) = (line_store(), line_graph());
        // B and C are both 2 mi from the depot.
        let got = nearest_neighbor(DEPOT_KEY, &ids(&[3, 2]), &store, &graph, 140.0).unwrap();
        assert_eq!(got, Some(0));
        let got = nearest_neighbor(DEPOT_KEY, &ids(&[2, 3]), &store, &graph, 140.0).unwrap();
        assert_eq!(got, Some(0));
    }

    #[test]
    fn bound_is_exclusive() {
        let (store, graph) = (line_store(), line_graph());
        let got = nearest_neighbor(DEPOT_KEY, &ids(&[2, 3]), &store, &graph, 2.0).unwrap();
        assert_eq!(got, None);
        let got = nearest_neighbor(DEPOT_KEY, &ids(&[2, 3]), &store, &graph, 2.01).unwrap();
        assert_eq!(got, Some(0));
    }

    #[test]
    fn empty_candidates() {
        let (store, graph) = (line_store(), line_graph());
        assert_eq!(nearest_neighbor(DEPOT_KEY, &[], &store, &graph, 140.0).unwrap(), None);
    }

    #[test]
    fn unknown_parcel() {
        let (store, graph) = (line_store(), line_graph());
        let err = nearest_neighbor(DEPOT_KEY, &ids(&[99]), &store, &graph, 140.0).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownParcel(ParcelId(99))));
    }

    #[test]
    fn unknown_location_is_graph_error() {
        let mut store = line_store();
        store.insert(Parcel::new(
            ParcelId(4),
            Address::new("Nowhere", "Town", "UT", "0"),
            Deadline::EndOfDay,
            1,
            "",
        ));
        let err =
            nearest_neighbor(DEPOT_KEY, &ids(&[4]), &store, &line_graph(), 140.0).unwrap_err();
        assert!(matches!(err, DispatchError::Graph(_)));
    }
}

// ── PriorityNearestNeighbor ───────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use super::*;

    #[test]
    fn chains_from_last_stop() {
        let (store, graph) = (line_store(), line_graph());
        let route = PriorityNearestNeighbor::default()
            .plan(&truck(1, &[&[3, 2, 1]], ClockTime::from_hms(8, 0, 0)), &store, &graph, DEPOT_KEY)
            .unwrap();
        // HUB → A (1 mi) → B (1 mi from A) → C.
        assert_eq!(route.stops, ids(&[1, 2, 3]));
        assert_eq!(route.vehicle, VehicleId(1));
    }

    #[test]
    fn higher_tier_drains_first() {
        let (store, graph) = (line_store(), line_graph());
        let route = PriorityNearestNeighbor::default()
            .plan(&truck(1, &[&[], &[3], &[1, 2]], ClockTime::from_hms(8, 0, 0)), &store, &graph, DEPOT_KEY)
            .unwrap();
        assert_eq!(route.stops, ids(&[3, 1, 2]));
    }

    #[test]
    fn empty_assignment_gives_empty_route() {
        let (store, graph) = (line_store(), line_graph());
        let route = PriorityNearestNeighbor::default()
            .plan(&truck(2, &[&[], &[]], ClockTime::from_hms(9, 5, 0)), &store, &graph, DEPOT_KEY)
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn unreachable_candidates_fail_fast() {
        let (store, graph) = (line_store(), line_graph());
        let err = PriorityNearestNeighbor::new(0.5)
            .plan(&truck(3, &[&[1]], ClockTime::from_hms(8, 0, 0)), &store, &graph, DEPOT_KEY)
            .unwrap_err();
        match err {
            DispatchError::NoReachableCandidate { vehicle, from } => {
                assert_eq!(vehicle, VehicleId(3));
                assert_eq!(from, DEPOT_KEY);
            }
            other => panic!("expected NoReachableCandidate, got {other:?}"),
        }
    }

    #[test]
    fn bundled_routes() {
        let (store, graph) = bundled();
        let planner = PriorityNearestNeighbor::default();
        let plan = |a: VehicleAssignment| planner.plan(&a, &store, &graph, DEPOT_KEY).unwrap().stops;

        let t1 = plan(truck(
            1,
            &[&[15], &[1, 13, 14, 16, 20, 29, 30, 31, 34, 37, 40], &[19, 21, 24]],
            ClockTime::from_hms(8, 0, 0),
        ));
        assert_eq!(t1, ids(&[15, 16, 34, 14, 20, 31, 40, 1, 29, 37, 30, 13, 21, 19, 24]));

        let t2 = plan(truck(
            2,
            &[&[], &[6, 25], &[3, 4, 8, 10, 11, 17, 18, 23, 28, 32, 33, 36, 38]],
            ClockTime::from_hms(9, 5, 0),
        ));
        assert_eq!(t2, ids(&[25, 6, 17, 32, 4, 28, 33, 10, 38, 3, 8, 36, 18, 23, 11]));

        let t3 = plan(truck(
            3,
            &[&[], &[], &[2, 5, 7, 9, 12, 22, 26, 27, 35, 39]],
            ClockTime::from_hms(10, 20, 0),
        ));
        assert_eq!(t3, ids(&[26, 22, 2, 7, 5, 9, 39, 27, 35, 12]));
    }

    #[test]
    fn planning_is_deterministic() {
        let (store, graph) = bundled();
        let a = truck(
            2,
            &[&[], &[6, 25], &[3, 4, 8, 10, 11, 17, 18, 23, 28, 32, 33, 36, 38]],
            ClockTime::from_hms(9, 5, 0),
        );
        let planner = PriorityNearestNeighbor::default();
        let first = planner.plan(&a, &store, &graph, DEPOT_KEY).unwrap();
        let second = planner.plan(&a, &store, &graph, DEPOT_KEY).unwrap();
        assert_eq!(first, second);
    }
}

// ── VehicleAssignment ─────────────────────────────────────────────────────────

#[cfg(test)]
mod assignment {
    use super::*;

    #[test]
    fn json_shape() {
        let json = r#"{
            "vehicle": 3,
            "tiers": [[], [], [2, 5]],
            "departure": "10:20:00",
            "waits_for": [1, 2]
        }"#;
        let a: VehicleAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.vehicle, VehicleId(3));
        assert_eq!(a.departure, ClockTime::from_hms(10, 20, 0));
        assert_eq!(a.parcels().collect::<Vec<_>>(), ids(&[2, 5]));
        assert_eq!(a.parcel_count(), 2);
        assert!(a.is_dependent());
    }

    #[test]
    fn waits_for_defaults_empty() {
        let json = r#"{ "vehicle": 1, "tiers": [[15]], "departure": "8:00:00" }"#;
        let a: VehicleAssignment = serde_json::from_str(json).unwrap();
        assert!(!a.is_dependent());
    }

    #[test]
    fn bad_departure_rejected() {
        let json = r#"{ "vehicle": 1, "tiers": [], "departure": "25:00:00" }"#;
        assert!(serde_json::from_str::<VehicleAssignment>(json).is_err());
    }
}
