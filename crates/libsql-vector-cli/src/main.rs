//! lsv - Entry Point
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lsv convert --from literal --to json` | Convert a vector between formats |
//! | `lsv query-expr --from json` | Print the `vector(?)` expression and its bound parameter |
//!
//! Input is read from stdin unless `--input` is given; output goes to
//! stdout unless `--output` is given.

use clap::{Parser, Subcommand};
use libsql_vector_cli::config::ConfigLoader;
use libsql_vector_cli::convert::{ConvertRequest, run_convert, run_query_expr};
use libsql_vector_cli::format::Format;
use libsql_vector_cli::logging::{init_logging, log_config_loaded};
use std::path::PathBuf;

/// Command line interface for lsv
#[derive(Parser, Debug)]
#[command(name = "lsv")]
#[command(about = "Convert libSQL vectors between literal, binary, base64 and JSON forms")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a vector from one format to another
    Convert {
        /// Input format (defaults to `convert.default_from`)
        #[arg(long, value_enum)]
        from: Option<Format>,

        /// Output format (defaults to `convert.default_to`)
        #[arg(long, value_enum)]
        to: Option<Format>,

        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the query-builder expression for a vector as JSON
    QueryExpr {
        /// Input format (defaults to `convert.default_from`)
        #[arg(long, value_enum)]
        from: Option<Format>,

        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let (mut config, config_source) = loader.load_with_source()?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_logging(&config.logging)?;
    log_config_loaded(config_source.as_deref());

    match cli.command {
        Command::Convert {
            from,
            to,
            input,
            output,
        } => run_convert(&ConvertRequest {
            from: from.unwrap_or(config.convert.default_from),
            to: to.unwrap_or(config.convert.default_to),
            input,
            output,
        }),
        Command::QueryExpr {
            from,
            input,
            output,
        } => run_query_expr(
            from.unwrap_or(config.convert.default_from),
            input.as_deref(),
            output.as_deref(),
        ),
    }
}
