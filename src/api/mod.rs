//! HTTP API over the geodesy functions and the live tracker

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;

use crate::config::TrackerConfig;
use crate::report::Tracker;
use crate::sources::{GeocodeClient, OpenNotifyClient};

/// State shared by all handlers
pub struct AppState {
    pub config: TrackerConfig,
    pub tracker: Tracker<OpenNotifyClient, GeocodeClient>,
}

impl AppState {
    pub fn new(config: TrackerConfig, http: reqwest::Client) -> Self {
        let tracker = Tracker::from_config(&config, http);
        Self { config, tracker }
    }
}
