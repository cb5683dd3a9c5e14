//! Build-time configuration for the client.
//!
//! A wasm bundle has no process environment at runtime, so values are captured
//! with `option_env!` when the crate is compiled and parsed on startup.

use dioxus_logger::tracing::Level;

use crate::error::ConfigError;

pub const LOG_LEVEL_VAR: &str = "SHOPPER_LOG_LEVEL";

pub const DEFAULT_TITLE: &str = "Shopper";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: Level,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(option_env!("SHOPPER_LOG_LEVEL"), option_env!("SHOPPER_TITLE"))
    }

    /// Builds a config from raw variable values, applying defaults for unset
    /// or blank values.
    pub fn from_vars(log_level: Option<&str>, title: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => parse_level(value)?,
            None => defaults.log_level,
        };

        let title = title
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.title);

        Ok(Self { log_level, title })
    }
}

fn parse_level(value: &str) -> Result<Level, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidEnvValue {
            var: LOG_LEVEL_VAR.to_string(),
            reason: format!("unknown log level '{}'", value),
        }),
    }
}
