//! Structured logging with tracing
//!
//! Installs the global subscriber for the `lsv` binary. Events go to stderr
//! because stdout carries converted vectors.

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;
use crate::error::ConfigError;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `LSV_LOG`, when set, takes precedence over the configured level and may
/// hold any `EnvFilter` directive (e.g. `libsql_vector=trace`).
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init()
    };
    installed.map_err(|err| ConfigError::Logging {
        message: err.to_string(),
    })?;

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level, ConfigError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::invalid(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log which configuration file was merged, if any
pub fn log_config_loaded(source: Option<&Path>) {
    match source {
        Some(path) => debug!("Configuration loaded from {}", path.display()),
        None => debug!("No configuration file found, using defaults and environment"),
    }
}
