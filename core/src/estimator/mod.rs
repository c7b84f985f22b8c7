pub mod estimate;

pub use estimate::{Estimator, DEFAULT_AIRSPEED_MPS};
