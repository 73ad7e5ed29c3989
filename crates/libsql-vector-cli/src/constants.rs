//! CLI constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lsv.toml";

/// Directory under the user config dir that holds the configuration file
pub const DEFAULT_CONFIG_DIR: &str = "lsv";

/// Prefix for configuration environment variables (`LSV_LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "LSV";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level; stdout carries converted data, so stay quiet
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "LSV_LOG";
