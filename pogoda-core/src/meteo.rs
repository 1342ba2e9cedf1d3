//! Forecast fetch from the Open-Meteo API.

use reqwest::Client;

use crate::{
    config::Config,
    error::FetchError,
    model::{Coordinates, RawForecast},
};

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    forecast_url: String,
}

impl ForecastClient {
    pub fn new(config: &Config) -> Self {
        Self { http: Client::new(), forecast_url: config.forecast_url.clone() }
    }

    /// Fetch one day of hourly data plus current conditions for a point.
    ///
    /// `timezone=auto` makes the provider return hour stamps already local to
    /// the coordinates, so no timezone math happens on our side. No retries,
    /// no timeout beyond the transport default.
    pub async fn fetch(&self, coords: Coordinates) -> Result<RawForecast, FetchError> {
        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", coords.latitude.to_string().as_str()),
                ("longitude", coords.longitude.to_string().as_str()),
                ("hourly", "temperature_2m,weathercode"),
                ("current_weather", "true"),
                ("timezone", "auto"),
                ("forecast_days", "1"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;

        let parsed: RawForecast =
            serde_json::from_str(&body).map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(parsed)
    }
}
