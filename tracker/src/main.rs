use anyhow::Context;
use bridge::FlightsBridge;
use clap::Parser;
use config::TrackerConfig;
use flightcore::estimator::{Estimator, DEFAULT_AIRSPEED_MPS};
use generator::DemoConfig;
use snapshot::TrackerState;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod bridge;
mod config;
mod generator;
mod snapshot;
mod tables;

#[derive(Parser)]
#[command(author, version, about = "Flight-position tracker over a static schedule")]
struct Args {
    /// Take a single snapshot and print a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a tracker config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "data/schedule.json")]
    schedule: PathBuf,
    #[arg(long, default_value = "data/airports.json")]
    airports: PathBuf,
    /// Assumed cruising speed in meters per second
    #[arg(long, default_value_t = DEFAULT_AIRSPEED_MPS)]
    speed: f64,
    /// Generate a synthetic schedule instead of loading one
    #[arg(long, default_value_t = false)]
    demo: bool,
    #[arg(long, default_value_t = 32)]
    demo_flights: usize,
    #[arg(long, default_value_t = 0)]
    demo_seed: u64,
    /// Keep the HTTP bridge alive for polling clients
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tracker_config = if let Some(path) = args.config {
        TrackerConfig::load(path)?
    } else {
        TrackerConfig::from_args(args.schedule, args.airports, args.speed)
    };

    let airports = tables::load_airports(&tracker_config.airports)?;
    let flights = if args.demo {
        let demo = DemoConfig {
            flights: args.demo_flights,
            seed: args.demo_seed,
        };
        generator::build_demo_schedule(&demo, &airports)?
    } else {
        tables::load_schedule(&tracker_config.schedule)?
    };

    let state = Arc::new(TrackerState {
        estimator: Estimator::with_speed(tracker_config.speed_mps),
        flights,
        airports,
    });
    let flights_bridge = FlightsBridge::new(state);

    if args.offline {
        let snapshot = flights_bridge.snapshot();

        println!(
            "Offline snapshot -> scheduled {}, in flight {}, skipped {}",
            snapshot.scheduled, snapshot.airborne, snapshot.skipped
        );
        for record in &snapshot.in_flight {
            println!(
                "  {} at ({:.4}, {:.4}) heading {:.1}",
                record.flight.flight_number,
                record.coordinates.lat,
                record.coordinates.lon,
                record.direction
            );
        }
        flights_bridge.publish_status("Offline snapshot ready.");

        let report = format!(
            "taken_at={} scheduled={} airborne={} skipped={}\n",
            snapshot.taken_at, snapshot.scheduled, snapshot.airborne, snapshot.skipped
        );
        let report_path = PathBuf::from("tools/data/flight_report.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        flights_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
