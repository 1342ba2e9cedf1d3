use thiserror::Error;

/// Why geocoding produced no coordinates.
///
/// The orchestrator collapses every variant to "city not found"; the variants
/// exist so tests and logs can still tell the causes apart.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("request to geocoder failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geocoder returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not parse geocoder response: {0}")]
    Body(String),

    #[error("no candidates for the requested place")]
    NoMatches,
}

/// Why the weather call produced no usable payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not parse weather response: {0}")]
    Body(String),
}

/// The two terminal failure states of the pipeline, rendered verbatim on the
/// page.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("could not find city: {city}")]
    CityNotFound { city: String },

    #[error("error fetching weather: {0}")]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_not_found_message_names_the_city() {
        let err = WeatherError::CityNotFound { city: "Unknownville".to_string() };
        assert_eq!(err.to_string(), "could not find city: Unknownville");
    }

    #[test]
    fn fetch_error_message_carries_the_detail() {
        let err = WeatherError::Fetch(FetchError::Body("missing field `hourly`".to_string()));
        assert_eq!(
            err.to_string(),
            "error fetching weather: could not parse weather response: missing field `hourly`"
        );
    }
}
