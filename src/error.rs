//! Error types for the Shopper UI client.

use thiserror::Error;

/// Errors raised while loading [`Config`](crate::config::Config).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
