//! # libSQL Vector
//!
//! A value type for `F32` vector embeddings that moves losslessly between
//! the representations a libSQL application deals with.
//!
//! ## Representations
//!
//! | Representation | Example | Module |
//! |----------------|---------|--------|
//! | Literal | `vector('[1.5,-2.75,3]')` | [`codec::text`] |
//! | Bracket form | `[1.5,-2.75,3]` | [`codec::text`] |
//! | Binary | 4 little-endian bytes per element | [`codec::binary`] |
//! | JSON | `[1.5,-2.75,3]` | [`codec::json`] |
//! | Driver value | `DriverValue::Text("vector('[...]')")` | [`adapters::driver`] |
//! | Query expression | `vector(?)` bound to `[...]` | [`adapters::query`] |
//!
//! ## Capabilities
//!
//! [`Vector`] implements one trait per boundary contract, see [`ports`].
//! The adapters are thin shims over [`codec`]; all formatting, parsing and
//! byte layout rules live there.
//!
//! ## Example
//!
//! ```
//! use libsql_vector::{QueryExpressible, TextCodec, Vector};
//!
//! let vector = Vector::new(vec![1.5, -2.75, 3.0]);
//! assert_eq!(vector.to_literal(), "vector('[1.5,-2.75,3]')");
//!
//! let expr = vector.query_expr();
//! assert_eq!(expr.sql, "vector(?)");
//!
//! let parsed: Vector = "vector('[1.5,-2.75,3]')".parse().unwrap();
//! assert_eq!(parsed, vector);
//! ```

/// Driver and query-builder adapters
pub mod adapters;
/// Representation codecs
pub mod codec;
/// Literal markers and layout constants
pub mod constants;
/// Error types
pub mod error;
/// Capability traits
pub mod ports;
/// The vector value type
pub mod vector;

pub use adapters::{DriverValue, SqlExpr};
pub use error::{Error, Result};
pub use ports::{BinaryCodec, DatabaseBindable, JsonCodec, QueryExpressible, TextCodec};
pub use vector::Vector;
