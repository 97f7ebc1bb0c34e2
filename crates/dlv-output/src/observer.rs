//! `SimOutputObserver<W>` — bridges `ReplayObserver` to an `OutputWriter`.

use tracing::warn;

use dlv_core::{ClockTime, ParcelId, VehicleId};
use dlv_sim::{ReplayObserver, SimConfig, Vehicle};

use crate::row::{DeliveryEventRow, EventKind, FleetMileageRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ReplayObserver`] that records every vehicle event and the final fleet
/// state of each query to any [`OutputWriter`] backend.
///
/// Events are buffered for the current query and written when it ends.
/// Errors from the writer are stored internally because observer methods
/// have no return value; check them with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    depot:      String,
    query_time: ClockTime,
    events:     Vec<DeliveryEventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the depot
    /// key.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            depot:      config.depot.clone(),
            query_time: ClockTime::MIDNIGHT,
            events:     Vec::new(),
            last_error: None,
        }
    }

    /// Flush the writer.  Call once after the last query.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(&mut self, vehicle: VehicleId, event: EventKind, parcel: Option<ParcelId>, time: ClockTime, location: &str) {
        self.events.push(DeliveryEventRow {
            query_time: self.query_time,
            vehicle,
            event,
            parcel,
            time,
            location: location.to_string(),
        });
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "replay output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ReplayObserver for SimOutputObserver<W> {
    fn on_query_start(&mut self, query: ClockTime) {
        self.query_time = query;
        self.events.clear();
    }

    fn on_departure(&mut self, vehicle: VehicleId, at: ClockTime) {
        let depot = self.depot.clone();
        self.push(vehicle, EventKind::Depart, None, at, &depot);
    }

    fn on_delivery(&mut self, vehicle: VehicleId, parcel: ParcelId, at: ClockTime, location: &str) {
        self.push(vehicle, EventKind::Deliver, Some(parcel), at, location);
    }

    fn on_return(&mut self, vehicle: VehicleId, at: ClockTime) {
        let depot = self.depot.clone();
        self.push(vehicle, EventKind::Return, None, at, &depot);
    }

    fn on_query_end(&mut self, query: ClockTime, vehicles: &[Vehicle]) {
        let events = std::mem::take(&mut self.events);
        if !events.is_empty() {
            let result = self.writer.write_events(&events);
            self.store_err(result);
        }

        let rows: Vec<FleetMileageRow> = vehicles
            .iter()
            .map(|v| FleetMileageRow {
                query_time:    query,
                vehicle:       v.id,
                miles:         v.miles,
                returned:      v.returned,
                position_time: v.position_time,
            })
            .collect();
        let result = self.writer.write_mileage(&rows);
        self.store_err(result);
    }
}
