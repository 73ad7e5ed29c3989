//! # lsv
//!
//! Command-line converter for libSQL vectors, built on [`libsql_vector`].
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading |
//! | [`constants`] | File names, env prefixes and defaults |
//! | [`convert`] | Conversion commands |
//! | [`error`] | Configuration error type |
//! | [`format`] | Supported input/output formats |
//! | [`logging`] | Tracing subscriber setup |

/// Configuration types and loader
pub mod config;
/// CLI constants
pub mod constants;
/// Conversion commands
pub mod convert;
/// Error types
pub mod error;
/// Input/output formats
pub mod format;
/// Structured logging with tracing
pub mod logging;

pub use config::{CliConfig, ConfigLoader};
pub use error::ConfigError;
pub use format::Format;
