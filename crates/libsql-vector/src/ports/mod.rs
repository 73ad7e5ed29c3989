//! Capability traits
//!
//! One trait per boundary contract. [`crate::Vector`] implements all five;
//! each contract stands on its own so callers can depend on just the one
//! they use.
//!
//! Mutating methods decode into a fresh buffer and only replace the target
//! on success, so a failed call leaves the value exactly as it was.
//!
//! | Trait | Contract |
//! |-------|----------|
//! | [`TextCodec`] | bracket form, literal, literal parsing |
//! | [`BinaryCodec`] | little-endian byte layout |
//! | [`JsonCodec`] | JSON array marshal/unmarshal |
//! | [`DatabaseBindable`] | driver scan and value |
//! | [`QueryExpressible`] | parameterized `vector(?)` expression |

use crate::adapters::{DriverValue, SqlExpr};
use crate::error::Result;

/// Textual literal codec
pub trait TextCodec {
    /// The bracket form, e.g. `[1.5,-2.75,3]`
    fn format_floats(&self) -> String;

    /// The full literal, e.g. `vector('[1.5,-2.75,3]')`
    fn to_literal(&self) -> String;

    /// Replace the contents with the elements of a `vector('[...]')` literal
    fn parse(&mut self, input: &str) -> Result<()>;
}

/// Binary layout codec
pub trait BinaryCodec {
    /// Append the binary encoding to `buf` and return the extended buffer
    fn encode_binary(&self, buf: Vec<u8>) -> Vec<u8>;

    /// Replace the contents with the elements encoded in `buf`
    fn decode_binary(&mut self, buf: &[u8]) -> Result<()>;
}

/// JSON array codec
pub trait JsonCodec {
    /// Encode as a JSON array of numbers
    fn marshal_json(&self) -> Result<String>;

    /// Replace the contents with the elements of a JSON array
    fn unmarshal_json(&mut self, data: &[u8]) -> Result<()>;
}

/// SQL driver scan/value contract
pub trait DatabaseBindable {
    /// Replace the contents with the vector held by a scanned driver value
    fn scan(&mut self, src: &DriverValue) -> Result<()>;

    /// The value bound as a statement parameter. Never fails.
    fn value(&self) -> DriverValue;
}

/// Query-builder expression hook
pub trait QueryExpressible {
    /// SQL fragment and bind vars used to embed the value in a query
    fn query_expr(&self) -> SqlExpr;
}
