use serde::Serialize;

use crate::geodesy::coordinate::Coordinate;

/// Sixteen-point compass, clockwise from north in 22.5° brackets
pub const COMPASS_16: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
    "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Eight-point compass, clockwise from north in 45° brackets
pub const COMPASS_8: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Resolution of the compass used to label a bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompassRose {
    Eight,
    #[default]
    Sixteen,
}

impl CompassRose {
    /// Returns the ordered labels of this rose, starting at north
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            CompassRose::Eight => &COMPASS_8,
            CompassRose::Sixteen => &COMPASS_16,
        }
    }

    /// Returns the angular width of one bracket in degrees
    pub fn bracket_width(&self) -> f64 {
        360.0 / self.labels().len() as f64
    }

    /// Parses a point count (8 or 16)
    pub fn from_points(points: u8) -> Option<Self> {
        match points {
            8 => Some(CompassRose::Eight),
            16 => Some(CompassRose::Sixteen),
            _ => None,
        }
    }
}

/// Compass direction and whole-degree bearing from an origin toward a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BearingResult {
    pub compass: &'static str,
    pub degrees: i32,
}

/// Computes the viewing direction from `origin` toward `destination`
///
/// The angle is measured in degree space with longitude as the x axis and
/// latitude as the y axis: `atan2(Δlon, Δlat)`, clockwise from north. This is
/// a planar approximation and not the great-circle initial bearing.
///
/// The destination comes first. Trackers pass the observed object as the
/// destination and the observer as the origin.
///
/// The compass label is picked by *rounding* the angle to the nearest
/// bracket, while [`BearingResult::degrees`] is the *truncated* angle. The two
/// rules differ on purpose, so an angle of 11.3° reads as `NNE` at 11 degrees.
pub fn bearing(destination: Coordinate, origin: Coordinate) -> BearingResult {
    bearing_with(destination, origin, CompassRose::Sixteen)
}

/// Same as [`bearing`] with a selectable compass resolution
pub fn bearing_with(destination: Coordinate, origin: Coordinate, rose: CompassRose) -> BearingResult {
    let delta_x = destination.longitude - origin.longitude;
    let delta_y = destination.latitude - origin.latitude;

    let normalized = normalize_degrees(delta_x.atan2(delta_y).to_degrees());

    BearingResult {
        compass: compass_label(normalized, rose),
        degrees: (normalized as i32).rem_euclid(360),
    }
}

/// Maps a normalized angle in [0, 360] onto a compass label
///
/// An angle rounding up to 360° wraps back onto north.
pub fn compass_label(normalized_degrees: f64, rose: CompassRose) -> &'static str {
    let labels = rose.labels();
    let index = (normalized_degrees / rose.bracket_width()).round() as usize;

    labels[index % labels.len()]
}

fn normalize_degrees(degrees: f64) -> f64 {
    if degrees < 0.0 {
        360.0 + degrees
    } else {
        degrees
    }
}
