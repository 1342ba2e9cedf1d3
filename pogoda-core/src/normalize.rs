//! Pure transform from a raw provider payload to the render-ready view model.
//!
//! No I/O and no failure paths: anything malformed enough to matter is
//! rejected earlier, at deserialization time.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::{
    icon::ConditionIcon,
    model::{ForecastViewModel, HourlyPoint, RawForecast},
};

/// Build the view model for `city` from a raw forecast payload.
///
/// The three hourly arrays are zipped by index; if the provider ever returns
/// mismatched lengths, the extra tail is dropped. Idempotent: identical input
/// always yields an identical view model.
pub fn normalize(city: &str, raw: &RawForecast) -> ForecastViewModel {
    let dominant = dominant_code(&raw.hourly.weathercode);

    let hourly = raw
        .hourly
        .time
        .iter()
        .zip(&raw.hourly.temperature_2m)
        .zip(&raw.hourly.weathercode)
        .map(|((time, &temperature), &code)| HourlyPoint {
            time: format_hour(time),
            temperature,
            icon: ConditionIcon::from_code(code),
        })
        .collect();

    ForecastViewModel {
        city: city.to_string(),
        current_temperature: raw.current_weather.temperature,
        current_windspeed: raw.current_weather.windspeed,
        dominant_icon: dominant.map_or(ConditionIcon::Unknown, ConditionIcon::from_code),
        hourly,
    }
}

/// Most frequent code in the sequence; `None` only when the sequence is empty.
///
/// Ties break on first occurrence: counts live in a map, but the winner is
/// picked by re-scanning in the original array order, so map iteration order
/// never leaks into the result.
fn dominant_code(codes: &[i64]) -> Option<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &code in codes {
        *counts.entry(code).or_insert(0) += 1;
    }

    let max = counts.values().copied().max()?;
    codes.iter().copied().find(|code| counts[code] == max)
}

/// Format an ISO-8601 local timestamp down to zero-padded 24-hour `HH:MM`.
///
/// Open-Meteo sends minute precision ("2023-01-01T06:00"); second precision
/// is accepted and truncated. Anything unparsable is passed through verbatim
/// so the transform stays infallible.
fn format_hour(stamp: &str) -> String {
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| stamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawCurrentWeather, RawHourly};

    fn raw(time: &[&str], temps: &[f64], codes: &[i64]) -> RawForecast {
        RawForecast {
            hourly: RawHourly {
                time: time.iter().map(|s| s.to_string()).collect(),
                temperature_2m: temps.to_vec(),
                weathercode: codes.to_vec(),
            },
            current_weather: RawCurrentWeather { temperature: 15.5, windspeed: 10.2 },
        }
    }

    #[test]
    fn builds_view_model_from_hourly_arrays() {
        let raw = raw(
            &["2023-01-01T00:00", "2023-01-01T01:00"],
            &[15.0, 14.5],
            &[0, 1],
        );

        let vm = normalize("Test", &raw);

        assert_eq!(vm.city, "Test");
        assert_eq!(vm.current_temperature, 15.5);
        assert_eq!(vm.current_windspeed, 10.2);
        assert_eq!(vm.hourly.len(), 2);
        assert_eq!(vm.hourly[0].time, "00:00");
        assert_eq!(vm.hourly[0].icon.glyph(), "☀️");
        assert_eq!(vm.hourly[1].temperature, 14.5);
    }

    #[test]
    fn dominant_code_is_the_mode() {
        assert_eq!(dominant_code(&[0, 1, 1, 0, 1]), Some(1));
        assert_eq!(dominant_code(&[95]), Some(95));
        assert_eq!(dominant_code(&[]), None);
    }

    #[test]
    fn dominant_code_ties_break_on_first_occurrence() {
        assert_eq!(dominant_code(&[3, 0, 0, 3]), Some(3));
        assert_eq!(dominant_code(&[61, 71, 61, 71]), Some(61));
    }

    #[test]
    fn mismatched_array_lengths_truncate_to_shortest() {
        let raw = raw(
            &["2023-01-01T00:00", "2023-01-01T01:00", "2023-01-01T02:00"],
            &[15.0, 14.5],
            &[0, 1, 2],
        );

        let vm = normalize("Test", &raw);
        assert_eq!(vm.hourly.len(), 2);
    }

    #[test]
    fn hour_formatting_drops_seconds_and_zero_pads() {
        assert_eq!(format_hour("2023-01-01T12:34:56"), "12:34");
        assert_eq!(format_hour("2023-01-01T06:00"), "06:00");
        assert_eq!(format_hour("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = raw(&["2023-01-01T00:00"], &[1.5], &[45]);

        let first = normalize("Test", &raw);
        let second = normalize("Test", &raw);
        assert_eq!(first, second);
    }
}
