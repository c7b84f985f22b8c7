use chrono::Local;
use flightcore::estimator::Estimator;
use flightcore::schedule::{AirportTable, InFlightRecord, ScheduledFlight};
use serde::Serialize;

/// Loaded tables plus the configured estimator, shared between the offline
/// run and the HTTP bridge.
pub struct TrackerState {
    pub estimator: Estimator,
    pub flights: Vec<ScheduledFlight>,
    pub airports: AirportTable,
}

impl TrackerState {
    /// Current in-flight records; "now" is re-derived on every call.
    pub fn in_progress(&self) -> Vec<InFlightRecord> {
        let now = Local::now();
        self.estimator.in_flight(&self.flights, &self.airports, &now)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::take(self)
    }
}

/// One-shot evaluation of the whole schedule.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub taken_at: i64,
    pub scheduled: usize,
    pub airborne: usize,
    pub skipped: usize,
    pub in_flight: Vec<InFlightRecord>,
}

impl Snapshot {
    pub fn take(state: &TrackerState) -> Self {
        let now = Local::now();
        let (_, skipped_before) = state.estimator.metrics();
        let records = state
            .estimator
            .in_flight(&state.flights, &state.airports, &now);
        let (_, skipped_after) = state.estimator.metrics();

        Snapshot {
            taken_at: now.timestamp_millis(),
            scheduled: state.flights.len(),
            airborne: records.len(),
            skipped: skipped_after - skipped_before,
            in_flight: records,
        }
    }
}
