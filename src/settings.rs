//! Layered settings: defaults → ~/.config/thousand-sunny/config.toml →
//! `--config` file → `SUNNY_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::location::providers::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};

const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Which location provider backs the ship's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Fixed,
    Ip,
    Unavailable,
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" | "mock" => Ok(Self::Fixed),
            "ip" => Ok(Self::Ip),
            "unavailable" | "none" => Ok(Self::Unavailable),
            _ => Err(format!("Unknown provider '{}'. Use 'fixed', 'ip' or 'unavailable'.", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    pub provider: ProviderKind,
    pub timeout_secs: f64,
    pub permission_granted: bool,
    /// Position reported by the fixed provider.
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Fixed,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            permission_granted: true,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl LocationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "warn".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub location: LocationSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Load from the default file, an optional explicit file, and the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(Self::default_path().as_deref(), explicit, None)
    }

    /// `env` replaces the process environment when given (for testing).
    pub fn load_with_env(
        default_file: Option<&Path>,
        explicit: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = default_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("SUNNY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("thousand-sunny").join("config.toml"))
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let timeout = self.location.timeout_secs;
        if !timeout.is_finite() || timeout <= 0.0 {
            return Err(SettingsError::Invalid {
                key: "location.timeout_secs",
                reason: format!("must be a positive number of seconds, got {}", timeout),
            });
        }
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(SettingsError::Invalid {
                key: "location.latitude",
                reason: format!("{} is outside -90..90", self.location.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(SettingsError::Invalid {
                key: "location.longitude",
                reason: format!("{} is outside -180..180", self.location.longitude),
            });
        }
        Ok(())
    }
}
