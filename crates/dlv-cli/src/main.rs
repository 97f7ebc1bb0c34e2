//! WGUPS delivery simulator CLI
//!
//! Replays the delivery day up to a chosen time and reports parcel statuses
//! and fleet mileage.
//!
//! # Example
//!
//! ```bash
//! # Interactive menu over the bundled data
//! wgups
//!
//! # One-shot queries
//! wgups query --time 09:00:00 --parcel 9
//! wgups query --time 13:00:00 --mileage
//! wgups --config data/dispatch.json query --time 10:30:00 --all --export ./output
//! ```

mod menu;

#[cfg(test)]
mod tests;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dlv_core::ParcelId;
use dlv_output::{CsvWriter, SimOutputObserver};
use dlv_query::{QueryFacade, QueryKind, QueryRequest};
use dlv_sim::SimConfig;

/// WGUPS delivery simulator
///
/// Deterministic: the same query always gives the same answer.
#[derive(Parser, Debug)]
#[command(name = "wgups")]
#[command(version, about, long_about = None)]
struct Args {
    /// Parcel dataset CSV
    #[arg(long, default_value = "data/packages.csv")]
    packages: PathBuf,

    /// Distance table CSV
    #[arg(long, default_value = "data/distances.csv")]
    distances: PathBuf,

    /// Dispatch config JSON. When omitted, the built-in three-truck day is used.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer one query and exit
    Query(QueryArgs),
}

#[derive(clap::Args, Debug)]
struct QueryArgs {
    /// Query time, 24-hour HH:MM:SS
    #[arg(long)]
    time: String,

    #[command(flatten)]
    kind: KindArgs,

    /// Write delivery_events.csv and fleet_mileage.csv into this directory
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct KindArgs {
    /// Report a single parcel
    #[arg(long)]
    parcel: Option<u32>,

    /// Report every parcel
    #[arg(long)]
    all: bool,

    /// Report fleet mileage only
    #[arg(long)]
    mileage: bool,
}

impl KindArgs {
    fn kind(&self) -> QueryKind {
        match self.parcel {
            Some(id) => QueryKind::Single(ParcelId(id)),
            None if self.all => QueryKind::All,
            None => QueryKind::Mileage,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,dlv=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::from_json_path(path)
            .with_context(|| format!("reading dispatch config {}", path.display()))?,
        None => SimConfig::standard(),
    };
    let mut facade = QueryFacade::load(&args.packages, &args.distances, config)
        .with_context(|| {
            format!(
                "loading {} and {}",
                args.packages.display(),
                args.distances.display()
            )
        })?;
    info!(
        parcels  = facade.sim().dataset.len(),
        vehicles = facade.sim().vehicles.len(),
        "delivery day loaded"
    );

    match args.command {
        Some(Command::Query(query)) => run_query(&mut facade, &query),
        None => {
            let stdin = io::stdin();
            menu::run(&mut facade, &mut stdin.lock(), &mut io::stdout())
        }
    }
}

fn run_query(facade: &mut QueryFacade, args: &QueryArgs) -> Result<()> {
    let request = QueryRequest::parse(&args.time, args.kind.kind())?;

    let report = match &args.export {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output files in {}", dir.display()))?;
            let mut observer = SimOutputObserver::new(writer, &facade.sim().config);
            let report = facade.query_with(&request, &mut observer)?;
            observer.finish();
            if let Some(e) = observer.take_error() {
                return Err(e).context("writing replay output");
            }
            info!(dir = %dir.display(), "replay exported");
            report
        }
        None => facade.query(&request)?,
    };

    println!("{report}");
    Ok(())
}
