use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Airport entry as found in the upstream airport table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub coordinates: Coordinates,
}

impl Airport {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates::new(latitude, longitude),
        }
    }
}

/// Read-only lookup table from airport identifier to airport record.
pub type AirportTable = HashMap<String, Airport>;
