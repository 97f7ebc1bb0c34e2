//! CSV distance-table loader.
//!
//! # CSV format
//!
//! A header row followed by one row per location.  The first column holds
//! the location key; the remaining columns hold distances in miles to each
//! location, in row order.  Empty cells are unset; a lower-triangular table
//! is the usual shape.
//!
//! ```csv
//! location,HUB,1060 Dalton Ave S (84104),1330 2100 S (84106)
//! HUB,0,,
//! 1060 Dalton Ave S (84104),7.2,0,
//! 1330 2100 S (84106),3.8,7.1,0
//! ```
//!
//! Keys are taken from the first column of each data row; header labels
//! only fix the column count.  The number of data rows must equal the
//! number of header columns after the first.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::graph::{DistanceGraph, DistanceGraphBuilder};
use crate::{GraphError, GraphResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`DistanceGraph`] from a CSV file.
pub fn load_distances_csv(path: &Path) -> GraphResult<DistanceGraph> {
    let file = std::fs::File::open(path)
        .map_err(GraphError::Io)?;
    load_distances_reader(file)
}

/// Like [`load_distances_csv`] but accepts any `Read` source.
pub fn load_distances_reader<R: Read>(reader: R) -> GraphResult<DistanceGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = csv_reader.records();

    // ── Header: label column + one column per location ────────────────────
    let header = match records.next() {
        Some(r) => r?,
        None => return Err(malformed(1, "empty distance table")),
    };
    let width = header.len().saturating_sub(1);
    if width == 0 {
        return Err(malformed(1, "header lists no locations"));
    }

    // ── Data rows ─────────────────────────────────────────────────────────
    let mut rows: Vec<(String, Vec<Option<f64>>)> = Vec::with_capacity(width);
    for result in records {
        let record = result?;
        let line = record.position().map_or(rows.len() as u64 + 2, |p| p.line());

        let mut fields = record.iter();
        let key = match fields.next() {
            Some(k) if !k.is_empty() => k.to_string(),
            _ => return Err(malformed(line, "missing location key")),
        };
        let cells: Vec<Option<f64>> = fields
            .map(|cell| parse_cell(cell, line))
            .collect::<GraphResult<_>>()?;

        if cells.len() > width {
            return Err(malformed(
                line,
                format!("{} distance cells but only {width} locations", cells.len()),
            ));
        }
        rows.push((key, cells));
    }

    if rows.len() != width {
        return Err(malformed(
            rows.len() as u64 + 1,
            format!("header lists {width} locations but table has {} rows", rows.len()),
        ));
    }

    // ── Build ─────────────────────────────────────────────────────────────
    let mut builder = DistanceGraphBuilder::new();
    for (i, (key, _)) in rows.iter().enumerate() {
        if builder.contains(key) {
            return Err(malformed(i as u64 + 2, format!("duplicate location {key:?}")));
        }
        builder.add_location(key.clone());
    }
    for (i, (_, cells)) in rows.iter().enumerate() {
        for (j, cell) in cells.iter().enumerate() {
            if let Some(miles) = *cell {
                builder.set_distance(
                    dlv_core::LocationId(i as u32),
                    dlv_core::LocationId(j as u32),
                    miles,
                );
            }
        }
    }

    let graph = builder.build();
    debug!(locations = graph.len(), "loaded distance table");
    Ok(graph)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_cell(cell: &str, line: u64) -> GraphResult<Option<f64>> {
    if cell.is_empty() {
        return Ok(None);
    }
    let miles: f64 = cell
        .parse()
        .map_err(|_| malformed(line, format!("invalid distance {cell:?}")))?;
    if !miles.is_finite() || miles < 0.0 {
        return Err(malformed(line, format!("distance {cell:?} must be a non-negative number")));
    }
    Ok(Some(miles))
}

fn malformed(line: u64, reason: impl Into<String>) -> GraphError {
    GraphError::Malformed { line, reason: reason.into() }
}
