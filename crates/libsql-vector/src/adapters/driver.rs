//! Driver scan/value contract
//!
//! [`DriverValue`] mirrors the storage classes a libSQL/SQLite driver hands
//! back from a row and accepts as a bound parameter. A vector is bound as
//! its textual literal and can be scanned back from either a text or a blob
//! column holding that literal.

use crate::codec::text::{format_literal, parse_literal};
use crate::error::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// A value crossing the driver boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DriverValue {
    /// SQL `NULL`
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl DriverValue {
    /// Name of the storage class, used in scan errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
        }
    }

    /// Borrow the text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this is SQL `NULL`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<String> for DriverValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DriverValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(value: &[u8]) -> Self {
        Self::Blob(value.to_vec())
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// Decode the elements held by a scanned driver value
///
/// Text is parsed as the literal directly; a blob must be UTF-8 text of the
/// same literal. Any other storage class is a [`Error::ScanType`].
pub fn scan_floats(src: &DriverValue) -> Result<Vec<f32>> {
    let result = match src {
        DriverValue::Text(text) => parse_literal(text),
        DriverValue::Blob(bytes) => std::str::from_utf8(bytes)
            .map_err(|err| Error::parse(format!("blob is not UTF-8 text: {err}")))
            .and_then(parse_literal),
        other => Err(Error::scan_type(other.kind())),
    };

    if let Err(err) = &result {
        debug!(kind = src.kind(), error = %err, "Vector scan rejected");
    }
    result
}

/// The driver value a vector binds as: its textual literal
pub fn literal_value(values: &[f32]) -> DriverValue {
    DriverValue::Text(format_literal(values))
}
