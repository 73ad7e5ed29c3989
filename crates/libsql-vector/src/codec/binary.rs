//! Little-endian binary layout
//!
//! Elements are stored back to back as 4-byte little-endian IEEE-754
//! singles. There is no header and no length field: the element count is
//! `bytes.len() / 4`, so a buffer of any other length is rejected.

use crate::constants::FLOAT_WIDTH;
use crate::error::{Error, Result};

/// Number of bytes needed to encode `count` elements
pub fn encoded_len(count: usize) -> usize {
    count * FLOAT_WIDTH
}

/// Append the encoding of `values` to `buf` and return the extended buffer
///
/// Existing bytes in `buf` are left untouched; pass `Vec::new()` for a
/// fresh encoding.
pub fn encode_binary(values: &[f32], mut buf: Vec<u8>) -> Vec<u8> {
    buf.reserve(encoded_len(values.len()));
    for value in values {
        buf.extend_from_slice(&value.to_le_bytes());
    }
    buf
}

/// Decode a buffer produced by [`encode_binary`]
///
/// An empty buffer decodes to an empty sequence.
pub fn decode_binary(bytes: &[u8]) -> Result<Vec<f32>> {
    if !bytes.len().is_multiple_of(FLOAT_WIDTH) {
        return Err(Error::binary_length(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(FLOAT_WIDTH)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
