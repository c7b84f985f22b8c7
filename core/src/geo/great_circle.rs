/// Mean Earth radius in meters (sphere approximation).
///
/// Downstream distance expectations are pinned to this constant; do not
/// swap in an ellipsoid model.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance and initial bearing between two points.
#[derive(Debug, Clone, Copy)]
pub struct GreatCircle {
    pub distance_m: f64,
    pub bearing_deg: f64,
}

pub struct GeoHelper;

impl GeoHelper {
    /// Haversine distance plus initial bearing, both from point 1 toward
    /// point 2. Inputs are degrees; no range validation is performed.
    ///
    /// Identical points yield distance 0 and bearing 0 (the `atan2(0, 0)`
    /// convention), never an error.
    pub fn great_circle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GreatCircle {
        let phi1 = lat1.to_radians();
        let phi2 = lat2.to_radians();
        let delta_phi = (lat2 - lat1).to_radians();
        let delta_lambda = (lon2 - lon1).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        let distance_m = EARTH_RADIUS_M * c;

        let y = delta_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
        let bearing_deg = (y.atan2(x).to_degrees() + 360.0) % 360.0;

        GreatCircle {
            distance_m,
            bearing_deg,
        }
    }
}
