//! Request orchestration: ties the geocoder, the forecast fetch and the
//! normalizer together, and drives one request/response cycle through the
//! [`RequestContext`] abstraction.

use crate::{
    config::Config,
    error::WeatherError,
    geocode::Geocoder,
    meteo::ForecastClient,
    model::{ForecastPage, ForecastViewModel},
    normalize::normalize,
};

/// The full pipeline behind the weather page. Built once from config and
/// shared across requests.
#[derive(Debug, Clone)]
pub struct WeatherService {
    config: Config,
    geocoder: Geocoder,
    forecast: ForecastClient,
}

impl WeatherService {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let geocoder = Geocoder::new(&config)?;
        let forecast = ForecastClient::new(&config);

        Ok(Self { config, geocoder, forecast })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn default_city(&self) -> &str {
        &self.config.default_city
    }

    /// Run the pipeline for one city: geocode, fetch, normalize.
    ///
    /// Exactly two failure terminals and one success terminal; no retries, no
    /// partial results. Any geocoding failure collapses to `CityNotFound`.
    pub async fn get_weather(&self, city: &str) -> Result<ForecastViewModel, WeatherError> {
        let coords = match self.geocoder.resolve(city).await {
            Ok(coords) => coords,
            Err(e) => {
                tracing::warn!("geocoding '{city}' failed: {e}");
                return Err(WeatherError::CityNotFound { city: city.to_string() });
            }
        };

        let raw = self.forecast.fetch(coords).await?;

        Ok(normalize(city, &raw))
    }
}

/// The four capabilities the pipeline needs from its hosting request layer.
/// Keeps `pogoda-core` independent of any web framework.
pub trait RequestContext {
    /// City submitted through the form, if any.
    fn form_city(&self) -> Option<String>;

    /// City remembered in client-side state from an earlier visit, if any.
    fn last_city(&self) -> Option<String>;

    /// Persist the city for future default-city behavior.
    fn remember_city(&mut self, city: &str);

    /// Hand the outcome to the presentation layer.
    fn render(&mut self, page: &ForecastPage);
}

/// Serve one request: pick the city, run the pipeline, render, and remember
/// the city when the invariant allows it.
///
/// The remembered-city write happens only after a fully successful run, and
/// never for the configured default city.
pub async fn handle_weather<C: RequestContext>(service: &WeatherService, ctx: &mut C) {
    let city = choose_city(ctx.form_city(), ctx.last_city(), service.default_city());

    let page = match service.get_weather(&city).await {
        Ok(weather) => ForecastPage { city: city.clone(), weather: Some(weather), error: None },
        Err(e) => ForecastPage { city: city.clone(), weather: None, error: Some(e.to_string()) },
    };

    let remember = page.error.is_none() && city != service.default_city();

    ctx.render(&page);

    if remember {
        ctx.remember_city(&city);
    }
}

/// Precedence: non-empty form input, then remembered city, then the default.
fn choose_city(form: Option<String>, remembered: Option<String>, default: &str) -> String {
    form.filter(|c| !c.is_empty())
        .or(remembered)
        .unwrap_or_else(|| default.to_string())
}
