//! Assembles the viewing report for the observer

use std::fmt;

use serde::Serialize;

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::geodesy::{bearing, distance, BearingResult, Coordinate, DistanceResult};
use crate::sources::{GeocodeClient, OpenNotifyClient, PositionSource, ReverseGeocoder};

/// Where the station is and how to look for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub iss: Coordinate,
    pub observer: Coordinate,
    pub distance: DistanceResult,
    pub bearing: BearingResult,
    pub country: String,
    pub nearest_city: String,
}

impl Report {
    /// Builds a report from already known positions and place labels
    pub fn new(iss: Coordinate, observer: Coordinate, country: String, nearest_city: String) -> Self {
        Self {
            iss,
            observer,
            distance: distance(iss, observer),
            bearing: bearing(iss, observer),
            country,
            nearest_city,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ISS distance from your location is: {} mi ({} km)",
            self.distance.miles.round(),
            self.distance.kilometers.round()
        )?;
        writeln!(f, "Country: {}", self.country)?;
        writeln!(f, "Nearest city: {}", self.nearest_city)?;
        write!(
            f,
            "Viewing direction: {} (Bearing: {})",
            self.bearing.compass, self.bearing.degrees
        )
    }
}

/// Combines a position source and a geocoder into reports
pub struct Tracker<P, G> {
    observer: Coordinate,
    positions: P,
    geocoder: G,
}

impl Tracker<OpenNotifyClient, GeocodeClient> {
    /// Creates a tracker talking to the public endpoints named in `config`
    pub fn from_config(config: &TrackerConfig, http: reqwest::Client) -> Self {
        Self::new(
            config.observer,
            OpenNotifyClient::new(http.clone(), config.iss_now_url.clone()),
            GeocodeClient::new(
                http,
                config.geocode_reverse_url.clone(),
                config.geocode_api_key.clone(),
            ),
        )
    }
}

impl<P, G> Tracker<P, G>
where
    P: PositionSource + Sync,
    G: ReverseGeocoder + Sync,
{
    /// Creates a tracker for the given observer
    pub fn new(observer: Coordinate, positions: P, geocoder: G) -> Self {
        Self {
            observer,
            positions,
            geocoder,
        }
    }

    /// Returns the observer location
    pub fn observer(&self) -> Coordinate {
        self.observer
    }

    /// Fetches the current position, geocodes it, and measures it from the observer
    ///
    /// The first failing request aborts the report.
    pub async fn report(&self) -> Result<Report> {
        let iss = self.positions.current_position().await?;
        let address = self.geocoder.reverse(iss).await?;

        Ok(Report::new(
            iss,
            self.observer,
            address.country_label(),
            address.nearest_city_label(),
        ))
    }
}
