use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Top-level configuration, optionally stored on disk.
///
/// Every field has a working built-in default, so a missing config file is a
/// normal first-run condition rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City used when neither the form nor the last-city cookie provides one.
    pub default_city: String,

    /// Base URL of the geocoding search endpoint.
    pub geocoder_url: String,

    /// Base URL of the weather forecast endpoint.
    pub forecast_url: String,

    /// Identifying header sent with geocoding requests; Nominatim rejects
    /// anonymous clients.
    pub user_agent: String,

    /// Name of the cookie carrying the remembered city.
    pub cookie_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: "Москва".to_string(),
            geocoder_url: "https://nominatim.openstreetmap.org/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            user_agent: "pogoda/0.1".to_string(),
            cookie_name: "last_city".to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the built-in defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "pogoda", "pogoda-web")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
