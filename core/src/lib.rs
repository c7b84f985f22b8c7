//! Flight-position estimation core for the Rust flight-tracking platform.
//!
//! Given a static flight schedule and an airport coordinate table, the
//! estimator classifies each flight as not-yet-departed, landed, or in
//! flight, interpolating a position and compass bearing for the airborne
//! ones. Everything is a pure function of (schedule, airports, now);
//! loading the tables and serving the results belong to callers.

pub mod estimator;
pub mod geo;
pub mod prelude;
pub mod schedule;
pub mod telemetry;

pub use prelude::{EstimateError, EstimateResult};
