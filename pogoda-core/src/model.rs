use serde::{Deserialize, Serialize};

use crate::icon::ConditionIcon;

/// Geographic point resolved by the geocoder; request-scoped, no lifecycle of
/// its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw weather payload as returned by the forecast provider.
///
/// All keys are required; a payload missing any of them fails deserialization
/// and is reported as a fetch error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub hourly: RawHourly,
    pub current_weather: RawCurrentWeather,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHourly {
    /// ISO-8601 timestamps, already in the location's local timezone
    /// (the request asks the provider to resolve the timezone itself).
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub weathercode: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
}

/// One hour of the daily forecast, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    /// Local wall-clock time, zero-padded `HH:MM`.
    pub time: String,
    pub temperature: f64,
    pub icon: ConditionIcon,
}

/// Normalized, render-ready forecast. Sole success artifact of the pipeline;
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastViewModel {
    pub city: String,
    pub current_temperature: f64,
    pub current_windspeed: f64,
    /// Most frequent condition across the day's hourly samples.
    pub dominant_icon: ConditionIcon,
    /// Chronological, in the provider's original order.
    pub hourly: Vec<HourlyPoint>,
}

/// Outcome handed to the presentation layer. Exactly one of `weather` and
/// `error` is populated.
#[derive(Debug, Clone)]
pub struct ForecastPage {
    /// City the page was resolved for (form input, remembered city, or default).
    pub city: String,
    pub weather: Option<ForecastViewModel>,
    pub error: Option<String>,
}
