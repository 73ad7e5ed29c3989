//! Error handling types

use crate::constants::FLOAT_WIDTH;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while decoding a vector from an external representation
///
/// Encoding into the literal, bracket or binary forms never fails. Every
/// variant is returned to the immediate caller; malformed input never panics.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed textual literal, bad wrapper, or an element that is not a float
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse
        message: String,
    },

    /// Binary buffer whose length is not a whole number of elements
    #[error("Binary length error: {len} bytes is not a multiple of {width}", width = FLOAT_WIDTH)]
    BinaryLength {
        /// Length of the rejected buffer
        len: usize,
    },

    /// Driver value of a kind that cannot hold a vector literal
    #[error("Scan type error: unsupported data type: {kind}")]
    ScanType {
        /// Name of the rejected driver value kind
        kind: &'static str,
    },

    /// JSON encoding or decoding error, passed through unchanged
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a binary length error
    pub fn binary_length(len: usize) -> Self {
        Self::BinaryLength { len }
    }

    /// Create a scan type error
    pub fn scan_type(kind: &'static str) -> Self {
        Self::ScanType { kind }
    }

    /// Whether this is a [`Error::Parse`]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Whether this is a [`Error::BinaryLength`]
    pub fn is_binary_length(&self) -> bool {
        matches!(self, Self::BinaryLength { .. })
    }

    /// Whether this is a [`Error::ScanType`]
    pub fn is_scan_type(&self) -> bool {
        matches!(self, Self::ScanType { .. })
    }

    /// Whether this is a [`Error::Json`]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}
