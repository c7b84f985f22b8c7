pub mod airport;
pub mod flight;
pub mod status;

pub use airport::{Airport, AirportTable, Coordinates};
pub use flight::ScheduledFlight;
pub use status::{FlightStatus, InFlightRecord, Position};
