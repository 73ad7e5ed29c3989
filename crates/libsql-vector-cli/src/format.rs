//! Input/output formats
//!
//! Every format decodes into a [`Vector`] and encodes back out of one, so
//! any pair can be converted. Text formats ignore surrounding whitespace on
//! input and end with a newline on output; `binary` is raw bytes both ways.

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use clap::ValueEnum;
use libsql_vector::{JsonCodec, TextCodec, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Representation of a vector on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Database literal, `vector('[1,2,3]')`
    Literal,
    /// Bracket form, `[1,2,3]`
    Brackets,
    /// JSON array, `[1,2,3]`
    Json,
    /// Raw little-endian f32 bytes
    Binary,
    /// Standard base64 of the binary layout
    Base64,
}

impl Format {
    /// Name used in configuration and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Brackets => "brackets",
            Self::Json => "json",
            Self::Binary => "binary",
            Self::Base64 => "base64",
        }
    }

    /// Whether the format is line-oriented text
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Binary)
    }

    /// Decode `input` in this format
    pub fn decode(self, input: &[u8]) -> Result<Vector> {
        let vector = match self {
            Self::Binary => Vector::from_bytes(input)?,
            Self::Literal => input_text(input)?.parse::<Vector>()?,
            Self::Brackets => Vector::from_brackets(input_text(input)?)?,
            Self::Json => Vector::from_json(input_text(input)?.as_bytes())?,
            Self::Base64 => {
                let bytes = BASE64
                    .decode(input_text(input)?)
                    .context("Invalid base64 input")?;
                Vector::from_bytes(&bytes)?
            }
        };
        Ok(vector)
    }

    /// Encode `vector` in this format
    pub fn encode(self, vector: &Vector) -> Result<Vec<u8>> {
        let mut out = match self {
            Self::Binary => vector.to_bytes(),
            Self::Literal => vector.to_literal().into_bytes(),
            Self::Brackets => vector.format_floats().into_bytes(),
            Self::Json => vector.marshal_json()?.into_bytes(),
            Self::Base64 => BASE64.encode(vector.to_bytes()).into_bytes(),
        };
        if self.is_text() {
            out.push(b'\n');
        }
        Ok(out)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn input_text(input: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(input).context("Input is not valid UTF-8 text")?;
    Ok(text.trim())
}
