//! Bracket form and database literal
//!
//! ```text
//! literal  = "vector('" brackets "')"
//! brackets = "[" [ float *( "," float ) ] "]"
//! ```
//!
//! Elements are split strictly on `,` with no whitespace trimming, and each
//! token goes through `f32::from_str`. A finite token that overflows `f32`
//! is rejected rather than rounded to infinity. Formatting always emits the
//! canonical element text from [`super::float`].

use super::float::write_float;
use crate::constants::{
    BRACKET_CLOSE, BRACKET_OPEN, ELEMENT_SEPARATOR, LITERAL_PREFIX, LITERAL_SUFFIX,
};
use crate::error::{Error, Result};

/// Rough per-element capacity hint for formatting
const FORMATTED_ELEMENT_HINT: usize = 10;

/// Format `values` as the bracket form, e.g. `[1.5,-2.75,3]`
pub fn format_floats(values: &[f32]) -> String {
    let mut out = String::with_capacity(2 + values.len() * FORMATTED_ELEMENT_HINT);
    write_brackets(&mut out, values);
    out
}

/// Format `values` as the full literal, e.g. `vector('[1.5,-2.75,3]')`
pub fn format_literal(values: &[f32]) -> String {
    let mut out = String::with_capacity(
        LITERAL_PREFIX.len() + LITERAL_SUFFIX.len() + 2 + values.len() * FORMATTED_ELEMENT_HINT,
    );
    out.push_str(LITERAL_PREFIX);
    write_brackets(&mut out, values);
    out.push_str(LITERAL_SUFFIX);
    out
}

fn write_brackets(out: &mut String, values: &[f32]) {
    out.push(BRACKET_OPEN);
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push(ELEMENT_SEPARATOR);
        }
        write_float(out, *value);
    }
    out.push(BRACKET_CLOSE);
}

/// Parse a full `vector('[...]')` literal
pub fn parse_literal(input: &str) -> Result<Vec<f32>> {
    let inner = input
        .strip_prefix(LITERAL_PREFIX)
        .ok_or_else(|| Error::parse(format!("literal must start with `{LITERAL_PREFIX}`")))?;
    let brackets = inner
        .strip_suffix(LITERAL_SUFFIX)
        .ok_or_else(|| Error::parse(format!("literal must end with `{LITERAL_SUFFIX}`")))?;
    parse_brackets(brackets)
}

/// Parse the bracket form alone, as returned by `vector_extract()`
pub fn parse_brackets(input: &str) -> Result<Vec<f32>> {
    let body = input
        .strip_prefix(BRACKET_OPEN)
        .and_then(|rest| rest.strip_suffix(BRACKET_CLOSE))
        .ok_or_else(|| {
            Error::parse(format!(
                "elements must be enclosed in `{BRACKET_OPEN}` and `{BRACKET_CLOSE}`"
            ))
        })?;

    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(ELEMENT_SEPARATOR)
        .enumerate()
        .map(|(index, token)| parse_element(token, index))
        .collect()
}

fn parse_element(token: &str, index: usize) -> Result<f32> {
    let value = token.parse::<f32>().map_err(|err| {
        Error::parse(format!("invalid element {token:?} at index {index}: {err}"))
    })?;
    if !value.is_finite() && !is_non_finite_spelling(token) {
        return Err(Error::parse(format!(
            "element {token:?} at index {index} is out of range for f32"
        )));
    }
    Ok(value)
}

/// Whether `token` names infinity or NaN rather than overflowing to it
fn is_non_finite_spelling(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|name| unsigned.eq_ignore_ascii_case(name))
}
