//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryEventRow, FleetMileageRow, OutputResult};

/// Sink for replay rows.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write a batch of vehicle events.
    fn write_events(&mut self, rows: &[DeliveryEventRow]) -> OutputResult<()>;

    /// Write one end-of-replay row per vehicle.
    fn write_mileage(&mut self, rows: &[FleetMileageRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
