use anyhow::Context;
use flightcore::schedule::{AirportTable, ScheduledFlight};
use log::info;
use std::fs;
use std::path::Path;

pub fn load_airports<P: AsRef<Path>>(path: P) -> anyhow::Result<AirportTable> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading airport table {}", path_ref.display()))?;
    let airports: AirportTable = serde_json::from_str(&contents)
        .with_context(|| format!("parsing airport table {}", path_ref.display()))?;
    info!("loaded {} airports from {}", airports.len(), path_ref.display());
    Ok(airports)
}

pub fn load_schedule<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ScheduledFlight>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading flight schedule {}", path_ref.display()))?;
    let flights: Vec<ScheduledFlight> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing flight schedule {}", path_ref.display()))?;
    info!("loaded {} flights from {}", flights.len(), path_ref.display());
    Ok(flights)
}
