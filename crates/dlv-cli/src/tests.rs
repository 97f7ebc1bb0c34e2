//! Unit tests for the `wgups` binary.

use std::io::Cursor;
use std::path::Path;

use clap::Parser;

use dlv_core::ParcelId;
use dlv_query::{QueryFacade, QueryKind};
use dlv_sim::SimConfig;

use crate::{menu, Args, Command};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn facade() -> QueryFacade {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    QueryFacade::load(
        &data.join("packages.csv"),
        &data.join("distances.csv"),
        SimConfig::standard(),
    )
    .unwrap()
}

fn run_menu(input: &str) -> String {
    let mut f = facade();
    let mut out = Vec::new();
    menu::run(&mut f, &mut Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn menu_count(output: &str) -> usize {
    output.matches("4: exit program.").count()
}

// ── Argument parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod args {
    use super::*;

    #[test]
    fn defaults_to_menu_over_bundled_data() {
        let args = Args::try_parse_from(["wgups"]).unwrap();
        assert_eq!(args.packages, Path::new("data/packages.csv"));
        assert_eq!(args.distances, Path::new("data/distances.csv"));
        assert!(args.config.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn single_parcel_query() {
        let args =
            Args::try_parse_from(["wgups", "query", "--time", "09:00:00", "--parcel", "9"]).unwrap();
        let Some(Command::Query(q)) = args.command else { panic!("expected query") };
        assert_eq!(q.time, "09:00:00");
        assert_eq!(q.kind.kind(), QueryKind::Single(ParcelId(9)));
        assert!(q.export.is_none());
    }

    #[test]
    fn all_and_mileage_kinds() {
        let args = Args::try_parse_from(["wgups", "query", "--time", "10:00:00", "--all"]).unwrap();
        let Some(Command::Query(q)) = args.command else { panic!("expected query") };
        assert_eq!(q.kind.kind(), QueryKind::All);

        let args = Args::try_parse_from([
            "wgups", "--config", "d.json", "query", "--time", "13:00:00", "--mileage", "--export", "out",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some(Path::new("d.json")));
        let Some(Command::Query(q)) = args.command else { panic!("expected query") };
        assert_eq!(q.kind.kind(), QueryKind::Mileage);
        assert_eq!(q.export.as_deref(), Some(Path::new("out")));
    }

    #[test]
    fn query_kind_is_required_and_exclusive() {
        assert!(Args::try_parse_from(["wgups", "query", "--time", "09:00:00"]).is_err());
        assert!(
            Args::try_parse_from(["wgups", "query", "--time", "09:00:00", "--all", "--mileage"]).is_err()
        );
        assert!(Args::try_parse_from(["wgups", "query", "--all"]).is_err());
    }
}

// ── Interactive menu ──────────────────────────────────────────────────────────

#[cfg(test)]
mod menu_loop {
    use super::*;

    #[test]
    fn mileage_then_exit() {
        let out = run_menu("3\n13:00:00\n2\n");
        assert_eq!(menu_count(&out), 1);
        assert!(out.contains("What time in military time would you like to view HH:MM:SS? "));
        assert!(out.contains("Truck two miles:    41.0"));
        assert!(out.contains("Total miles driven: 114.6"));
    }

    #[test]
    fn single_parcel_lookup() {
        let out = run_menu("1\n9\n09:00:00\n2\n");
        assert!(out.contains("What package number would you like to look up? "));
        assert!(out.contains("   9 | 300 State St "));
    }

    #[test]
    fn continue_shows_menu_again() {
        let out = run_menu("3\n09:00:00\n1\n4\n");
        assert_eq!(menu_count(&out), 2);
        assert!(out.contains("Total miles driven: 15.6"));
    }

    #[test]
    fn bad_input_is_reported_and_menu_repeats() {
        let out = run_menu("7\n1\nnine\n2\n25:00:00\n1\n4\n");
        assert!(out.contains("\"7\" is not a menu option."));
        assert!(out.contains("\"nine\" is not a package number."));
        assert_eq!(menu_count(&out), 4);
        assert!(!out.contains("Total miles driven"));
    }

    #[test]
    fn unknown_parcel_is_reported() {
        let out = run_menu("1\n99\n09:00:00\n2\n");
        assert!(out.contains("ParcelId(99) is not in the parcel dataset"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        assert_eq!(menu_count(&run_menu("")), 1);
        assert_eq!(menu_count(&run_menu("3\n")), 1);
    }
}
