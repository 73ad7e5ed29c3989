//! Parameterized query expression
//!
//! Query builders splice an [`SqlExpr`] into the statement as-is and bind
//! its vars positionally. For a vector the template calls libSQL's
//! `vector()` function and binds the bracket form, so element text is
//! never interpolated into SQL.

use super::driver::DriverValue;
use crate::codec::text::format_floats;
use crate::constants::VECTOR_EXPR_SQL;
use serde::Serialize;
use std::fmt;

/// Raw SQL fragment with its positional bind parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlExpr {
    /// SQL text containing one `?` per var
    pub sql: String,
    /// Values bound to the placeholders, in order
    pub vars: Vec<DriverValue>,
}

impl SqlExpr {
    /// Create an expression from a template and its vars
    pub fn new<S: Into<String>>(sql: S, vars: Vec<DriverValue>) -> Self {
        Self {
            sql: sql.into(),
            vars,
        }
    }
}

impl fmt::Display for SqlExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// `vector(?)` bound to the bracket form of `values`
pub fn vector_expr(values: &[f32]) -> SqlExpr {
    SqlExpr::new(
        VECTOR_EXPR_SQL,
        vec![DriverValue::Text(format_floats(values))],
    )
}
