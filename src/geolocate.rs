//! HTTP geolocation adapter for resolving the device position.

use serde::Deserialize;
use tracing::warn;

use crate::geo::GeoPoint;
use crate::traits::PositionProvider;

#[derive(Debug, Clone)]
pub struct GeolocateConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeolocateConfig {
    fn default() -> Self {
        Self {
            base_url: "http://ip-api.com".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeolocateClient {
    config: GeolocateConfig,
    client: reqwest::blocking::Client,
}

impl GeolocateClient {
    pub fn new(config: GeolocateConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl PositionProvider for GeolocateClient {
    /// Resolve the device position, or `None` when the lookup fails.
    ///
    /// Any transport or decode failure degrades to `None`; callers rank
    /// in input order in that case.
    fn current_position(&self) -> Option<GeoPoint> {
        let url = format!("{}/json", self.config.base_url);

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<GeolocateResponse>());

        match response {
            Ok(body) => Some(GeoPoint::new(body.lat, body.lon)),
            Err(err) => {
                warn!("geolocation lookup failed: {err}");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeolocateResponse {
    lat: f64,
    lon: f64,
}
