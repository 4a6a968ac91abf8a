use crate::error::Result;
use crate::geodesy::Coordinate;
use crate::sources::models::IssNow;
use crate::sources::PositionSource;

/// Client for the Open Notify `iss-now` endpoint
#[derive(Debug, Clone)]
pub struct OpenNotifyClient {
    http: reqwest::Client,
    url: String,
}

impl OpenNotifyClient {
    /// Creates a client for the given endpoint URL
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetches and decodes the raw response document
    pub async fn fetch(&self) -> Result<IssNow> {
        log::debug!("GET {}", self.url);

        let doc = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<IssNow>()
            .await?;

        Ok(doc)
    }
}

impl PositionSource for OpenNotifyClient {
    async fn current_position(&self) -> Result<Coordinate> {
        let position = self.fetch().await?.position()?;
        log::info!("ISS position {}", position);
        Ok(position)
    }
}
