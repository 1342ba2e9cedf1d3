//! Forward geocoding: convert a free-text city name to coordinates.
//! Uses Nominatim (OpenStreetMap) search - free, no API key required.

use reqwest::Client;
use serde::Deserialize;

use crate::{config::Config, error::GeocodeError, model::Coordinates};

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
    search_url: String,
}

/// One candidate match from the search endpoint. Nominatim serializes
/// coordinates as strings.
#[derive(Debug, Deserialize)]
struct GeoCandidate {
    lat: String,
    lon: String,
}

impl Geocoder {
    /// Build a geocoder from config. Nominatim rejects clients without an
    /// identifying `User-Agent`, so it is baked into the HTTP client here.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder().user_agent(config.user_agent.clone()).build()?;

        Ok(Self { http, search_url: config.geocoder_url.clone() })
    }

    /// Resolve a city name to coordinates via a single search request.
    ///
    /// Takes the first candidate's `lat`/`lon`. Every failure mode ends up as
    /// a [`GeocodeError`]; no retries.
    pub async fn resolve(&self, city: &str) -> Result<Coordinates, GeocodeError> {
        let res = self
            .http
            .get(&self.search_url)
            .query(&[("q", city), ("format", "json")])
            .send()
            .await
            .inspect_err(|e| tracing::debug!("geocoder request failed: {e}"))?;

        let status = res.status();
        if !status.is_success() {
            tracing::debug!("geocoder returned status {status}");
            return Err(GeocodeError::Status(status));
        }

        let body = res.text().await?;

        let candidates: Vec<GeoCandidate> = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("geocoder response parse error: {e}");
            GeocodeError::Body(e.to_string())
        })?;

        let first = candidates.first().ok_or(GeocodeError::NoMatches)?;

        let latitude = first
            .lat
            .parse::<f64>()
            .map_err(|e| GeocodeError::Body(format!("bad latitude '{}': {e}", first.lat)))?;
        let longitude = first
            .lon
            .parse::<f64>()
            .map_err(|e| GeocodeError::Body(format!("bad longitude '{}': {e}", first.lon)))?;

        Ok(Coordinates { latitude, longitude })
    }
}
