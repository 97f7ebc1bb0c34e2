//! Per-replay vehicle state.

use dlv_core::{ClockTime, ParcelId, VehicleId};

/// One delivery vehicle as of the current replay.
///
/// Rebuilt by [`reset`][Self::reset] at the start of every query.  Mileage
/// only grows within a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id:            VehicleId,
    /// Miles driven so far.
    pub miles:         f64,
    /// Planned stops, in delivery order.
    pub route:         Vec<ParcelId>,
    /// Effective departure for this replay.
    pub departure:     ClockTime,
    /// Distance-table key of the last location reached.
    pub position:      String,
    /// Time the vehicle reached `position` (the departure until the first
    /// stop).
    pub position_time: ClockTime,
    /// Drove back to the depot before the query time.
    pub returned:      bool,
}

impl Vehicle {
    /// A vehicle parked at `depot` with nothing assigned.
    pub fn new(id: VehicleId, depot: &str, day_start: ClockTime) -> Self {
        Self {
            id,
            miles:         0.0,
            route:         Vec::new(),
            departure:     day_start,
            position:      depot.to_string(),
            position_time: day_start,
            returned:      false,
        }
    }

    /// Back to the start-of-day state at `depot`.
    pub fn reset(&mut self, depot: &str, day_start: ClockTime) {
        self.miles = 0.0;
        self.route.clear();
        self.departure = day_start;
        self.position.clear();
        self.position.push_str(depot);
        self.position_time = day_start;
        self.returned = false;
    }

    /// Set the departure; the clock starts from here.
    pub fn set_departure(&mut self, at: ClockTime) {
        self.departure = at;
        self.position_time = at;
    }

    /// Record a completed leg of `miles` ending at `location` at `arrival`.
    pub fn advance(&mut self, location: &str, miles: f64, arrival: ClockTime) {
        self.position.clear();
        self.position.push_str(location);
        self.miles += miles;
        self.position_time = arrival;
    }

    /// Return time, if back at the depot.
    #[inline]
    pub fn return_time(&self) -> Option<ClockTime> {
        self.returned.then_some(self.position_time)
    }
}
