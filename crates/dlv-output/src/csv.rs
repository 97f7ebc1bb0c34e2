//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `delivery_events.csv`
//! - `fleet_mileage.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryEventRow, FleetMileageRow, OutputResult};

/// Writes replay output to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    mileage:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("delivery_events.csv"))?;
        events.write_record(["query_time", "vehicle", "event", "parcel", "time", "location"])?;

        let mut mileage = Writer::from_path(dir.join("fleet_mileage.csv"))?;
        mileage.write_record(["query_time", "vehicle", "miles", "returned", "position_time"])?;

        Ok(Self { events, mileage, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[DeliveryEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.query_time.to_string(),
                row.vehicle.0.to_string(),
                row.event.to_string(),
                row.parcel.map(|p| p.0.to_string()).unwrap_or_default(),
                row.time.to_string(),
                row.location.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_mileage(&mut self, rows: &[FleetMileageRow]) -> OutputResult<()> {
        for row in rows {
            self.mileage.write_record(&[
                row.query_time.to_string(),
                row.vehicle.0.to_string(),
                format!("{:.1}", row.miles),
                (row.returned as u8).to_string(),
                row.position_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.mileage.flush()?;
        Ok(())
    }
}
