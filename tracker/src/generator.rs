use anyhow::ensure;
use flightcore::schedule::{AirportTable, ScheduledFlight};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic demo schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub flights: usize,
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            flights: 32,
            seed: 0,
        }
    }
}

/// Builds a deterministic schedule of random routes between the known
/// airports, with departure times spread across the day so a snapshot
/// taken at any hour finds a mix of statuses.
pub fn build_demo_schedule(
    config: &DemoConfig,
    airports: &AirportTable,
) -> anyhow::Result<Vec<ScheduledFlight>> {
    let mut ids: Vec<&String> = airports.keys().collect();
    ids.sort();
    ensure!(
        ids.len() >= 2,
        "demo schedule needs at least two airports, got {}",
        ids.len()
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut flights = Vec::with_capacity(config.flights);

    for index in 0..config.flights {
        let from = rng.gen_range(0..ids.len());
        let mut to = rng.gen_range(0..ids.len());
        while to == from {
            to = rng.gen_range(0..ids.len());
        }

        let departure_time = format!(
            "{:02}:{:02}:{:02}",
            rng.gen_range(0..24u32),
            rng.gen_range(0..60u32),
            rng.gen_range(0..60u32)
        );

        flights.push(ScheduledFlight::new(
            &format!("DM{:03}", index + 1),
            ids[from],
            ids[to],
            &departure_time,
        ));
    }

    Ok(flights)
}
