//! Configuration loader
//!
//! Handles loading configuration from defaults, a TOML file and
//! environment variables using Figment.

use super::CliConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error::ConfigError;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    ///
    /// Unlike the default locations, an explicit path must exist.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `CliConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `LSV_CONVERT__DEFAULT_TO=base64`)
    pub fn load(&self) -> Result<CliConfig, ConfigError> {
        self.load_with_source().map(|(config, _)| config)
    }

    /// Load configuration and report which file, if any, was merged
    ///
    /// Nothing is logged here; callers log the source with
    /// [`crate::logging::log_config_loaded`] after installing the subscriber.
    pub fn load_with_source(&self) -> Result<(CliConfig, Option<PathBuf>), ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(CliConfig::default()));

        let source = match &self.config_path {
            Some(config_path) if !config_path.exists() => {
                return Err(ConfigError::NotFound {
                    path: config_path.clone(),
                });
            }
            Some(config_path) => Some(config_path.clone()),
            None => Self::find_default_config_path(),
        };
        if let Some(path) = &source {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: CliConfig = figment.extract().map_err(Box::new)?;
        validate_config(&config)?;
        Ok((config, source))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        config: &CliConfig,
        path: P,
    ) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(config)?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate configuration values
fn validate_config(config: &CliConfig) -> Result<(), ConfigError> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}
