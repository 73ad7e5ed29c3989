//! Configuration types and loader
//!
//! Sources are merged by [`ConfigLoader`] in this order (later overrides
//! earlier): built-in defaults, a TOML file, `LSV_`-prefixed environment
//! variables.

/// Figment-based configuration loader
pub mod loader;
/// Configuration data types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CliConfig, ConvertConfig, LoggingConfig};
