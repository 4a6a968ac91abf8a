use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geodesy::Coordinate;

/// Country label used when reverse geocoding finds no country
pub const OCEAN_COUNTRY: &str = "Ocean";

/// City label used when no locality is known
pub const CITY_UNKNOWN: &str = "Unknown City";

/// Maximum number of characters kept in a place label
pub const LABEL_WIDTH: usize = 13;

/// Body of the Open Notify `iss-now.json` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct IssNow {
    pub message: String,
    pub timestamp: i64,
    pub iss_position: IssPosition,
}

/// Station position as decimal-degree strings
#[derive(Debug, Clone, Deserialize)]
pub struct IssPosition {
    pub latitude: String,
    pub longitude: String,
}

impl IssNow {
    /// Parses the position strings into a coordinate
    pub fn position(&self) -> Result<Coordinate> {
        if self.message != "success" {
            return Err(Error::Upstream(format!(
                "iss-now answered with message {:?}",
                self.message
            )));
        }

        let latitude = parse_degrees("latitude", &self.iss_position.latitude)?;
        let longitude = parse_degrees("longitude", &self.iss_position.longitude)?;

        Ok(Coordinate::new(latitude, longitude))
    }
}

fn parse_degrees(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::Parse(format!("{} {:?}: {}", field, value, e)))
}

/// Body of the geocode.maps.co `reverse` endpoint
///
/// Only the fields the tracker reads are declared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl ReverseGeocodeResponse {
    /// Returns the address, or an empty one when the position is over water
    pub fn into_address(self) -> Address {
        let mut address = self.address.unwrap_or_default();
        if address.display_name.is_none() {
            address.display_name = self.display_name;
        }
        address
    }
}

/// Postal address of a reverse geocoded position
///
/// Any field may be missing; empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Address {
    /// Country name, or [`OCEAN_COUNTRY`]
    pub fn country_label(&self) -> String {
        non_empty(&self.country)
            .map(truncate_label)
            .unwrap_or_else(|| OCEAN_COUNTRY.to_string())
    }

    /// First known of city, suburb and state, or [`CITY_UNKNOWN`]
    ///
    /// Over the ocean the city is always unknown.
    pub fn nearest_city_label(&self) -> String {
        if self.country_label() == OCEAN_COUNTRY {
            return CITY_UNKNOWN.to_string();
        }

        non_empty(&self.city)
            .or_else(|| non_empty(&self.suburb))
            .or_else(|| non_empty(&self.state))
            .map(truncate_label)
            .unwrap_or_else(|| CITY_UNKNOWN.to_string())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn truncate_label(label: &str) -> String {
    label.chars().take(LABEL_WIDTH).collect()
}
