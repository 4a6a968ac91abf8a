//! Literal configuration for the tracker
//!
//! There is no config file or environment parsing. Edit the constants below,
//! or override them on a [`TrackerConfig`] in code.

use crate::geodesy::Coordinate;

/// Latitude of the observer (Manchester, UK)
pub const DEVICE_LAT: f64 = 53.480970;

/// Longitude of the observer (Manchester, UK)
pub const DEVICE_LON: f64 = -2.237150;

/// API key for geocode.maps.co; sign up for a free account to obtain one
pub const GEOCODE_API_KEY: &str = "";

/// Current ISS position endpoint
pub const ISS_NOW_URL: &str = "http://api.open-notify.org/iss-now.json";

/// Reverse geocoding endpoint
pub const GEOCODE_REVERSE_URL: &str = "https://geocode.maps.co/reverse";

/// Settings shared by the console program and the API server
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub observer: Coordinate,
    pub geocode_api_key: String,
    pub iss_now_url: String,
    pub geocode_reverse_url: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            observer: Coordinate::new(DEVICE_LAT, DEVICE_LON),
            geocode_api_key: GEOCODE_API_KEY.to_string(),
            iss_now_url: ISS_NOW_URL.to_string(),
            geocode_reverse_url: GEOCODE_REVERSE_URL.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Replaces the observer location
    pub fn with_observer(mut self, observer: Coordinate) -> Self {
        self.observer = observer;
        self
    }

    /// Replaces the geocoding API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.geocode_api_key = key.into();
        self
    }
}
