use serde::{Deserialize, Serialize};

/// Display icon for a weather condition, mapped from WMO weather codes.
///
/// See: https://open-meteo.com/en/docs#weathervariables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionIcon {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl ConditionIcon {
    /// Convert a provider weather code to an icon.
    ///
    /// Total over all integers: codes outside the known vocabulary map to
    /// [`ConditionIcon::Unknown`], never to an error.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => Self::Rain,
            71 | 73 | 75 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Emoji glyph rendered in the page.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "🌀",
        }
    }
}

impl std::fmt::Display for ConditionIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_expected_glyphs() {
        assert_eq!(ConditionIcon::from_code(0).glyph(), "☀️");
        assert_eq!(ConditionIcon::from_code(1).glyph(), "⛅");
        assert_eq!(ConditionIcon::from_code(45).glyph(), "🌫️");
        assert_eq!(ConditionIcon::from_code(55).glyph(), "🌧️");
        assert_eq!(ConditionIcon::from_code(82).glyph(), "🌧️");
        assert_eq!(ConditionIcon::from_code(86).glyph(), "❄️");
        assert_eq!(ConditionIcon::from_code(95).glyph(), "⛈️");
    }

    #[test]
    fn unknown_codes_fall_back_to_spiral() {
        assert_eq!(ConditionIcon::from_code(100).glyph(), "🌀");
        assert_eq!(ConditionIcon::from_code(-1).glyph(), "🌀");
        assert_eq!(ConditionIcon::from_code(4).glyph(), "🌀");
    }

    #[test]
    fn mapping_is_total_and_deterministic_over_0_to_99() {
        for code in 0..100 {
            let first = ConditionIcon::from_code(code);
            let second = ConditionIcon::from_code(code);
            assert_eq!(first, second);
            assert!(!first.glyph().is_empty());
        }
    }
}
