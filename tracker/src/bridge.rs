use crate::snapshot::{Snapshot, TrackerState};
use std::{net::SocketAddr, sync::Arc, thread};
use tokio::runtime::Builder;
use warp::Filter;

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Bridge that serves the current in-flight list over HTTP.
///
/// Nothing is cached: every request re-runs the estimation against the
/// wall clock, so two polls a minute apart see the flights move.
pub struct FlightsBridge {
    state: Arc<TrackerState>,
}

impl FlightsBridge {
    pub fn new(state: Arc<TrackerState>) -> Self {
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());

        let flights_route = warp::path("flights")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<TrackerState>| warp::reply::json(&state.in_progress()));

        let snapshot_route = warp::path("snapshot")
            .and(warp::get())
            .and(state_filter)
            .map(|state: Arc<TrackerState>| warp::reply::json(&state.snapshot()));

        thread::spawn(move || {
            let routes = flights_route.or(snapshot_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    /// One-shot snapshot over the shared state, for the offline run.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn publish_status(&self, message: &str) {
        println!("[TRACKER] {}", message);
    }
}
