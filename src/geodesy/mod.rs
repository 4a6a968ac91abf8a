//! Great-circle distance and compass bearing between geographic coordinates
//!
//! Everything in this module is pure: no I/O, no shared mutable state, and no
//! error conditions. Inputs are not range checked.

pub mod bearing;
pub mod coordinate;
pub mod distance;

pub use bearing::{bearing, bearing_with, compass_label, BearingResult, CompassRose, COMPASS_16, COMPASS_8};
pub use coordinate::Coordinate;
pub use distance::{distance, DistanceResult, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
