use chrono::{DateTime, NaiveTime, TimeZone};

use crate::geo::GeoHelper;
use crate::prelude::{EstimateError, EstimateResult};
use crate::schedule::{AirportTable, FlightStatus, InFlightRecord, Position, ScheduledFlight};
use crate::telemetry::{LogManager, MetricsRecorder};

/// Assumed constant cruising speed in meters per second.
pub const DEFAULT_AIRSPEED_MPS: f64 = 10_000.0;

/// Classifies scheduled flights against the wall clock.
///
/// The estimator is stateless across calls apart from the configured
/// airspeed; every estimate re-derives elapsed time from the `now` it is
/// handed and nothing is cached.
pub struct Estimator {
    speed_mps: f64,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Estimator {
    pub fn new() -> Self {
        Self::with_speed(DEFAULT_AIRSPEED_MPS)
    }

    pub fn with_speed(speed_mps: f64) -> Self {
        Self {
            speed_mps,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    /// Classifies one flight at instant `now`.
    ///
    /// The departure time-of-day is interpreted on `now`'s calendar date in
    /// `now`'s zone, so a flight scheduled after midnight flips back to
    /// `NotDeparted` when the date rolls over.
    pub fn estimate<Tz: TimeZone>(
        &self,
        flight: &ScheduledFlight,
        airports: &AirportTable,
        now: &DateTime<Tz>,
    ) -> EstimateResult<FlightStatus> {
        let departure = airports
            .get(&flight.departure_airport)
            .ok_or_else(|| EstimateError::UnknownAirport(flight.departure_airport.clone()))?;
        let destination = airports
            .get(&flight.destination_airport)
            .ok_or_else(|| EstimateError::UnknownAirport(flight.destination_airport.clone()))?;

        let arc = GeoHelper::great_circle(
            departure.coordinates.latitude,
            departure.coordinates.longitude,
            destination.coordinates.latitude,
            destination.coordinates.longitude,
        );

        let takeoff = NaiveTime::parse_from_str(&flight.departure_time, "%H:%M:%S")
            .map_err(|_| EstimateError::MalformedTime(flight.departure_time.clone()))?;
        let departed_at = now.date_naive().and_time(takeoff);
        let elapsed_ms = now
            .naive_local()
            .signed_duration_since(departed_at)
            .num_milliseconds() as f64;

        // Same-airport route: no travel time to divide by, counts as landed
        // whatever the clock says.
        if arc.distance_m == 0.0 {
            return Ok(FlightStatus::Landed {
                flight_number: flight.flight_number.clone(),
            });
        }

        let travel_ms = arc.distance_m / self.speed_mps * 1000.0;
        let progress = elapsed_ms / travel_ms;

        if progress < 0.0 {
            return Ok(FlightStatus::NotDeparted {
                flight_number: flight.flight_number.clone(),
            });
        }
        if progress >= 1.0 {
            return Ok(FlightStatus::Landed {
                flight_number: flight.flight_number.clone(),
            });
        }

        let from = departure.coordinates;
        let to = destination.coordinates;
        Ok(FlightStatus::InFlight(InFlightRecord {
            flight: flight.clone(),
            direction: arc.bearing_deg,
            coordinates: Position {
                lat: from.latitude + (to.latitude - from.latitude) * progress,
                lon: from.longitude + (to.longitude - from.longitude) * progress,
            },
            timestamp: now.timestamp_millis(),
        }))
    }

    /// Maps [`Self::estimate`] over the schedule and keeps the airborne
    /// records, preserving input order.
    ///
    /// A flight that fails to estimate (unknown airport, malformed time) is
    /// logged and skipped; one bad entry never aborts the batch.
    pub fn in_flight<Tz: TimeZone>(
        &self,
        flights: &[ScheduledFlight],
        airports: &AirportTable,
        now: &DateTime<Tz>,
    ) -> Vec<InFlightRecord> {
        let mut airborne = Vec::new();
        for flight in flights {
            match self.estimate(flight, airports, now) {
                Ok(FlightStatus::InFlight(record)) => {
                    self.metrics.record_estimated();
                    airborne.push(record);
                }
                Ok(_) => self.metrics.record_estimated(),
                Err(err) => {
                    self.metrics.record_skipped();
                    self.logger.record_warning(&format!(
                        "skipping flight {}: {}",
                        flight.flight_number, err
                    ));
                }
            }
        }
        self.logger.record(&format!(
            "estimated {} flights, {} in flight",
            flights.len(),
            airborne.len()
        ));
        airborne
    }

    /// Returns `(estimated, skipped)` totals across batch runs.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::EARTH_RADIUS_M;
    use crate::schedule::Airport;
    use chrono::{Duration, TimeZone, Utc};
    use std::f64::consts::FRAC_PI_2;

    fn table() -> AirportTable {
        let mut airports = AirportTable::new();
        airports.insert("EQA".into(), Airport::new(0.0, 0.0));
        airports.insert("EQB".into(), Airport::new(0.0, 90.0));
        airports.insert("NEA".into(), Airport::new(0.0, 1.0));
        airports.insert("CPY".into(), Airport::new(0.0, 0.0)); // same spot as EQA
        airports
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap()
    }

    // Travel time in milliseconds for the EQA -> EQB equator quarter arc at
    // the default airspeed.
    fn quarter_arc_travel_ms() -> i64 {
        (EARTH_RADIUS_M * FRAC_PI_2 / DEFAULT_AIRSPEED_MPS * 1000.0) as i64
    }

    #[test]
    fn zero_progress_sits_exactly_at_departure() {
        let estimator = Estimator::new();
        let flight = ScheduledFlight::new("EQ001", "EQA", "EQB", "12:00:00");
        let status = estimator.estimate(&flight, &table(), &noon()).unwrap();
        match status {
            FlightStatus::InFlight(record) => {
                assert_eq!(record.coordinates.lat, 0.0);
                assert_eq!(record.coordinates.lon, 0.0);
                assert!((record.direction - 90.0).abs() < 1e-9);
                assert_eq!(record.timestamp, noon().timestamp_millis());
            }
            other => panic!("expected in flight, got {:?}", other),
        }
    }

    #[test]
    fn half_elapsed_time_interpolates_the_midpoint() {
        let estimator = Estimator::new();
        let flight = ScheduledFlight::new("EQ001", "EQA", "EQB", "12:00:00");
        let now = noon() + Duration::milliseconds(quarter_arc_travel_ms() / 2);
        let status = estimator.estimate(&flight, &table(), &now).unwrap();
        match status {
            FlightStatus::InFlight(record) => {
                assert_eq!(record.coordinates.lat, 0.0);
                assert!((record.coordinates.lon - 45.0).abs() < 0.01);
            }
            other => panic!("expected in flight, got {:?}", other),
        }
    }

    #[test]
    fn coordinates_approach_destination_near_arrival() {
        let estimator = Estimator::new();
        let flight = ScheduledFlight::new("EQ002", "EQA", "NEA", "12:00:00");
        // EQA -> NEA is about 11.1 seconds at the default airspeed.
        let now = noon() + Duration::milliseconds(11_000);
        let status = estimator.estimate(&flight, &table(), &now).unwrap();
        match status {
            FlightStatus::InFlight(record) => {
                assert!(record.coordinates.lon > 0.98);
                assert!(record.coordinates.lon < 1.0);
            }
            other => panic!("expected in flight, got {:?}", other),
        }
    }

    #[test]
    fn future_departure_is_not_departed() {
        let estimator = Estimator::new();
        let flight = ScheduledFlight::new("EQ003", "EQA", "EQB", "13:30:00");
        let status = estimator.estimate(&flight, &table(), &noon()).unwrap();
        assert!(matches!(status, FlightStatus::NotDeparted { .. }));
        assert_eq!(status.flight_number(), "EQ003");
    }

    #[test]
    fn elapsed_beyond_travel_time_is_landed() {
        let estimator = Estimator::new();
        let flight = ScheduledFlight::new("EQ004", "EQA", "NEA", "08:00:00");
        let status = estimator.estimate(&flight, &table(), &noon()).unwrap();
        assert!(matches!(status, FlightStatus::Landed { .. }));
    }

    #[test]
    fn progress_is_monotonic_until_landing() {
        let estimator = Estimator::new();
        let flight = ScheduledFlight::new("EQ001", "EQA", "EQB", "12:00:00");
        let airports = table();
        let travel_ms = quarter_arc_travel_ms();

        let mut last_lon = -1.0;
        for step in 0..10 {
            let now = noon() + Duration::milliseconds(travel_ms * step / 10);
            match estimator.estimate(&flight, &airports, &now).unwrap() {
                FlightStatus::InFlight(record) => {
                    assert!(record.coordinates.lon > last_lon);
                    last_lon = record.coordinates.lon;
                }
                other => panic!("expected in flight at step {}, got {:?}", step, other),
            }
        }

        for extra_ms in [0, 1, 3_600_000] {
            let now = noon() + Duration::milliseconds(travel_ms + 1 + extra_ms);
            let status = estimator.estimate(&flight, &airports, &now).unwrap();
            assert!(matches!(status, FlightStatus::Landed { .. }));
        }
    }

    #[test]
    fn degenerate_route_lands_regardless_of_elapsed_time() {
        let estimator = Estimator::new();
        let airports = table();
        // Same airport id and distinct ids at the same coordinates, both
        // before and after the scheduled departure.
        for flight in [
            ScheduledFlight::new("EQ005", "EQA", "EQA", "13:30:00"),
            ScheduledFlight::new("EQ006", "EQA", "CPY", "08:00:00"),
        ] {
            let status = estimator.estimate(&flight, &airports, &noon()).unwrap();
            assert!(
                matches!(status, FlightStatus::Landed { .. }),
                "flight {} should land immediately",
                flight.flight_number
            );
        }
    }

    #[test]
    fn unknown_airport_is_rejected() {
        let estimator = Estimator::new();
        let flight = ScheduledFlight::new("EQ007", "EQA", "ZZZ", "12:00:00");
        let err = estimator.estimate(&flight, &table(), &noon()).unwrap_err();
        assert!(matches!(err, EstimateError::UnknownAirport(id) if id == "ZZZ"));
    }

    #[test]
    fn malformed_departure_time_is_rejected() {
        let estimator = Estimator::new();
        for bad in ["12:00", "ab:cd:ef", "12-00-00", ""] {
            let flight = ScheduledFlight::new("EQ008", "EQA", "EQB", bad);
            let err = estimator.estimate(&flight, &table(), &noon()).unwrap_err();
            assert!(matches!(err, EstimateError::MalformedTime(_)));
        }
    }

    #[test]
    fn custom_airspeed_stretches_the_flight() {
        // At a tenth of the default speed the EQA -> NEA hop takes about
        // 111 seconds, so one minute in it is still airborne.
        let estimator = Estimator::with_speed(1_000.0);
        let flight = ScheduledFlight::new("EQ009", "EQA", "NEA", "12:00:00");
        let now = noon() + Duration::seconds(60);
        let status = estimator.estimate(&flight, &table(), &now).unwrap();
        assert!(status.is_in_flight());
    }

    #[test]
    fn batch_keeps_airborne_records_in_input_order_and_skips_bad_entries() {
        let estimator = Estimator::new();
        let airports = table();
        let now = noon() + Duration::minutes(5);
        let flights = vec![
            ScheduledFlight::new("EQ001", "EQA", "EQB", "12:00:00"), // airborne
            ScheduledFlight::new("EQ010", "EQA", "ZZZ", "12:00:00"), // unknown airport
            ScheduledFlight::new("EQ003", "EQA", "EQB", "13:30:00"), // not departed
            ScheduledFlight::new("EQ004", "EQA", "NEA", "08:00:00"), // landed
            ScheduledFlight::new("EQ011", "EQB", "EQA", "12:00:00"), // airborne
        ];

        let airborne = estimator.in_flight(&flights, &airports, &now);
        let numbers: Vec<&str> = airborne
            .iter()
            .map(|record| record.flight.flight_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["EQ001", "EQ011"]);
        assert_eq!(estimator.metrics(), (4, 1));
    }
}
