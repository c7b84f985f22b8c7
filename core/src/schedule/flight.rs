use serde::{Deserialize, Serialize};

/// One entry of the static flight schedule.
///
/// Field names follow the upstream JSON wire format, so a `schedule.json`
/// entry deserializes verbatim. `departure_time` is an `HH:MM:SS`
/// time-of-day string; the estimator interprets it on the current calendar
/// date at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledFlight {
    pub flight_number: String,
    pub departure_airport: String,
    pub destination_airport: String,
    pub departure_time: String,
}

impl ScheduledFlight {
    pub fn new(
        flight_number: &str,
        departure_airport: &str,
        destination_airport: &str,
        departure_time: &str,
    ) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            departure_airport: departure_airport.to_string(),
            destination_airport: destination_airport.to_string(),
            departure_time: departure_time.to_string(),
        }
    }
}
