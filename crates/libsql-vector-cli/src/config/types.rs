//! Configuration data types

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::format::Format;
use serde::{Deserialize, Serialize};

/// Root configuration for the `lsv` binary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Defaults for conversion commands
    pub convert: ConvertConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Formats used when `--from` / `--to` are not given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Input format
    pub default_from: Format,

    /// Output format
    pub default_to: Format,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            default_from: Format::Literal,
            default_to: Format::Json,
        }
    }
}
