//! Core library for the `pogoda` weather page.
//!
//! This crate defines:
//! - Configuration handling (default city, provider endpoints)
//! - The request pipeline: city name → coordinates → raw forecast → view model
//! - Shared domain models and the error taxonomy
//! - A request-context abstraction so the pipeline stays independent of any
//!   particular web framework
//!
//! It is used by `pogoda-web`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod geocode;
pub mod icon;
pub mod meteo;
pub mod model;
pub mod normalize;
pub mod pipeline;

pub use config::Config;
pub use error::{FetchError, GeocodeError, WeatherError};
pub use geocode::Geocoder;
pub use icon::ConditionIcon;
pub use meteo::ForecastClient;
pub use model::{Coordinates, ForecastPage, ForecastViewModel, HourlyPoint, RawForecast};
pub use pipeline::{RequestContext, WeatherService, handle_weather};
