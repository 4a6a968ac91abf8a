use crate::error::Result;
use crate::geodesy::Coordinate;
use crate::sources::models::{Address, ReverseGeocodeResponse};
use crate::sources::ReverseGeocoder;

/// Client for the geocode.maps.co reverse geocoding endpoint
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeocodeClient {
    /// Creates a client for the given endpoint URL and API key
    pub fn new(http: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Query string sent for a position, coordinates at full precision
    pub fn query(&self, position: Coordinate) -> [(&'static str, String); 3] {
        [
            ("lat", position.latitude.to_string()),
            ("lon", position.longitude.to_string()),
            ("api_key", self.api_key.clone()),
        ]
    }

    /// Fetches and decodes the raw response document
    pub async fn fetch(&self, position: Coordinate) -> Result<ReverseGeocodeResponse> {
        log::debug!("GET {} lat={} lon={}", self.url, position.latitude, position.longitude);

        let doc = self
            .http
            .get(&self.url)
            .query(&self.query(position))
            .send()
            .await?
            .error_for_status()?
            .json::<ReverseGeocodeResponse>()
            .await?;

        Ok(doc)
    }
}

impl ReverseGeocoder for GeocodeClient {
    async fn reverse(&self, position: Coordinate) -> Result<Address> {
        let address = self.fetch(position).await?.into_address();
        if address.country.is_none() {
            log::debug!("no country at {}, assuming open water", position);
        }
        Ok(address)
    }
}
