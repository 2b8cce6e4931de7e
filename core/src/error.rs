//! Error types for libtyping-core.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML text could not be parsed into a config.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
