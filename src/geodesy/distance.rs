use serde::{Deserialize, Serialize};

use crate::geodesy::coordinate::Coordinate;

/// Mean radius of the Earth in miles
pub const EARTH_RADIUS_MI: f64 = 3958.0;

/// Mean radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance expressed in both miles and kilometers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub miles: f64,
    pub kilometers: f64,
}

/// Calculates the shortest path between two coordinates on the surface of the Earth
///
/// Uses the haversine formula in its `atan2` form, which stays well conditioned
/// for both coincident and antipodal points. No range validation is performed.
pub fn distance(p: Coordinate, q: Coordinate) -> DistanceResult {
    let c = central_angle(p, q);

    DistanceResult {
        miles: c * EARTH_RADIUS_MI,
        kilometers: c * EARTH_RADIUS_KM,
    }
}

/// Angular separation of two coordinates in radians
fn central_angle(p: Coordinate, q: Coordinate) -> f64 {
    let lat1 = p.latitude.to_radians();
    let lon1 = p.longitude.to_radians();
    let lat2 = q.latitude.to_radians();
    let lon2 = q.longitude.to_radians();

    let diff_lat = lat2 - lat1;
    let diff_lon = lon2 - lon1;

    let a = (diff_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (diff_lon / 2.0).sin().powi(2);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
