use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

use crate::error::ConfigError;

const BUNDLED: &str = include_str!("../config/tour.toml");

/// Knobs for a tour run. Every field has a default, so a partial TOML
/// document is enough.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub app_name: String,
    pub temp_file: PathBuf,
    pub parallel_delay_ms: u64,
    pub worker_delay_ms: u64,
    pub log_level: String,
    pub color: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            app_name: "Rust Language Tour".to_string(),
            temp_file: PathBuf::from("temp_rust_example.txt"),
            parallel_delay_ms: 100,
            worker_delay_ms: 500,
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUNDLED)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::invalid_value("app_name", "must not be empty"));
        }
        if self.temp_file.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value("temp_file", "must not be empty"));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            ConfigError::invalid_value(
                "log_level",
                format!("'{}' is not one of off, error, warn, info, debug, trace", self.log_level),
            )
        })
    }

    pub fn parallel_delay(&self) -> Duration {
        Duration::from_millis(self.parallel_delay_ms)
    }

    pub fn worker_delay(&self) -> Duration {
        Duration::from_millis(self.worker_delay_ms)
    }

    /// No delays, no color, temp file redirected. Used by tests.
    pub fn quiet(temp_file: impl Into<PathBuf>) -> Self {
        Self {
            temp_file: temp_file.into(),
            parallel_delay_ms: 0,
            worker_delay_ms: 0,
            color: false,
            ..Self::default()
        }
    }
}
