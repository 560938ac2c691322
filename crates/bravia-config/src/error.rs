//! Error types for configuration decoding

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while decoding the platform config section
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform section could not be decoded
    #[error("invalid platform configuration: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// A tv entry is missing a required field or holds an invalid value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
