use serde::{Deserialize, Serialize};

use super::flight::ScheduledFlight;

/// Interpolated position in degrees, using the upstream `lat`/`lon` keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Record emitted for a flight that is currently airborne.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InFlightRecord {
    /// The full input schedule entry, echoed back.
    pub flight: ScheduledFlight,
    /// Initial great-circle bearing in degrees, fixed for the whole flight.
    pub direction: f64,
    pub coordinates: Position,
    /// Epoch milliseconds captured at evaluation time.
    pub timestamp: i64,
}

/// Classification of one scheduled flight at evaluation time.
///
/// Serialized with an internal `status` tag so bridge consumers get one
/// stable wire shape across all three variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum FlightStatus {
    #[serde(rename = "not departed", rename_all = "camelCase")]
    NotDeparted { flight_number: String },
    #[serde(rename = "landed", rename_all = "camelCase")]
    Landed { flight_number: String },
    #[serde(rename = "in flight")]
    InFlight(InFlightRecord),
}

impl FlightStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, FlightStatus::InFlight(_))
    }

    pub fn flight_number(&self) -> &str {
        match self {
            FlightStatus::NotDeparted { flight_number } => flight_number,
            FlightStatus::Landed { flight_number } => flight_number,
            FlightStatus::InFlight(record) => &record.flight.flight_number,
        }
    }
}
