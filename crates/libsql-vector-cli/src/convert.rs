//! Conversion commands
//!
//! The `*_bytes` functions are pure and hold the command logic; the `run_*`
//! wrappers only add file/stdio handling around them.

use crate::format::Format;
use anyhow::{Context, Result};
use libsql_vector::QueryExpressible;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A `convert` invocation with defaults already applied
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Input format
    pub from: Format,
    /// Output format
    pub to: Format,
    /// Input file, stdin when `None`
    pub input: Option<PathBuf>,
    /// Output file, stdout when `None`
    pub output: Option<PathBuf>,
}

/// Convert `input` from one format to another
pub fn convert_bytes(input: &[u8], from: Format, to: Format) -> Result<Vec<u8>> {
    let vector = from
        .decode(input)
        .with_context(|| format!("Failed to decode {from} input"))?;
    debug!(%from, %to, dimensions = vector.len(), "Decoded vector");
    to.encode(&vector)
        .with_context(|| format!("Failed to encode {to} output"))
}

/// Render the query-builder expression for `input` as a JSON object
///
/// Output shape: `{"sql":"vector(?)","vars":["[1,2,3]"]}` plus a newline.
pub fn query_expr_bytes(input: &[u8], from: Format) -> Result<Vec<u8>> {
    let vector = from
        .decode(input)
        .with_context(|| format!("Failed to decode {from} input"))?;
    let expr = vector.query_expr();
    debug!(sql = %expr, vars = expr.vars.len(), "Built query expression");
    let mut out = serde_json::to_vec(&expr).context("Failed to render query expression")?;
    out.push(b'\n');
    Ok(out)
}

/// Run `lsv convert`
pub fn run_convert(request: &ConvertRequest) -> Result<()> {
    let input = read_input(request.input.as_deref())?;
    let output = convert_bytes(&input, request.from, request.to)?;
    write_output(request.output.as_deref(), &output)?;
    info!(
        from = %request.from,
        to = %request.to,
        bytes_in = input.len(),
        bytes_out = output.len(),
        "Conversion complete"
    );
    Ok(())
}

/// Run `lsv query-expr`
pub fn run_query_expr(from: Format, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let input = read_input(input)?;
    let rendered = query_expr_bytes(&input, from)?;
    write_output(output, &rendered)
}

/// Read all input from a file, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Write output to a file, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
