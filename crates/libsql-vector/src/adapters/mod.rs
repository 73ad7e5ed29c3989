//! Driver and query-builder adapters
//!
//! Thin translation shims between [`crate::codec`] and the shapes a SQL
//! driver or query builder expects. They hold no grammar or layout logic
//! of their own.

/// Driver scan/value contract
pub mod driver;
/// Parameterized query expression
pub mod query;

pub use driver::DriverValue;
pub use query::SqlExpr;
