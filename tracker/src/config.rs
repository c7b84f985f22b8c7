use anyhow::Context;
use flightcore::estimator::DEFAULT_AIRSPEED_MPS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub schedule: PathBuf,
    pub airports: PathBuf,
    #[serde(default = "default_speed")]
    pub speed_mps: f64,
}

fn default_speed() -> f64 {
    DEFAULT_AIRSPEED_MPS
}

impl TrackerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading tracker config {}", path_ref.display()))?;
        let config: TrackerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing tracker config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(schedule: PathBuf, airports: PathBuf, speed_mps: f64) -> Self {
        Self {
            schedule,
            airports,
            speed_mps,
        }
    }
}
