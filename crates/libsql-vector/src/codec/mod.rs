//! Representation codecs
//!
//! Pure functions over `&[f32]`. [`crate::Vector`] and the adapters call
//! into these; nothing else in the crate knows the grammar or byte layout.
//!
//! | Codec | Direction |
//! |-------|-----------|
//! | [`float`] | one `f32` to its canonical decimal text |
//! | [`text`] | bracket form and `vector('...')` literal |
//! | [`binary`] | little-endian 4-byte layout |
//! | [`json`] | JSON numeric array |

/// Little-endian binary layout
pub mod binary;
/// Canonical single-float formatting
pub mod float;
/// JSON array encoding
pub mod json;
/// Bracket form and database literal
pub mod text;

pub use binary::{decode_binary, encode_binary, encoded_len};
pub use float::{format_float, write_float};
pub use json::{from_json, to_json};
pub use text::{format_floats, format_literal, parse_brackets, parse_literal};
