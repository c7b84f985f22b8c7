pub mod great_circle;

pub use great_circle::{GeoHelper, GreatCircle, EARTH_RADIUS_M};
