//! Error types
//!
//! Conversion failures travel as `anyhow::Error` with context attached at
//! the I/O boundary; configuration and logging setup have their own enum so
//! callers can tell a bad config apart from bad input.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration and logging setup errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", path.display())]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// Merged sources could not be deserialized
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// A configuration value is out of range
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the invalid value
        message: String,
    },

    /// Configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be written
    #[error("Failed to write configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// A global tracing subscriber is already installed
    #[error("Failed to initialize logging: {message}")]
    Logging {
        /// Description of the failure
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid configuration error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
