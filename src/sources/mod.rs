//! Upstream data sources: station position and reverse geocoding

use std::future::Future;

use crate::error::Result;
use crate::geodesy::Coordinate;

pub mod geocode;
pub mod models;
pub mod open_notify;

pub use geocode::GeocodeClient;
pub use models::{Address, IssNow, ReverseGeocodeResponse, CITY_UNKNOWN, OCEAN_COUNTRY};
pub use open_notify::OpenNotifyClient;

/// Supplies the current position of the station
pub trait PositionSource {
    fn current_position(&self) -> impl Future<Output = Result<Coordinate>> + Send;
}

/// Translates a position into a postal address
pub trait ReverseGeocoder {
    fn reverse(&self, position: Coordinate) -> impl Future<Output = Result<Address>> + Send;
}
