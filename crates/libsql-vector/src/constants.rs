//! Literal markers and layout constants
//!
//! Shared by the codecs and the adapters so the textual grammar and the
//! SQL template are defined in exactly one place.

// ============================================================================
// TEXTUAL LITERAL
// ============================================================================

/// Opening marker of the database literal
pub const LITERAL_PREFIX: &str = "vector('";

/// Closing marker of the database literal
pub const LITERAL_SUFFIX: &str = "')";

/// Opening bracket of the bracket form
pub const BRACKET_OPEN: char = '[';

/// Closing bracket of the bracket form
pub const BRACKET_CLOSE: char = ']';

/// Separator between formatted elements
pub const ELEMENT_SEPARATOR: char = ',';

// ============================================================================
// BINARY LAYOUT
// ============================================================================

/// Bytes per encoded element (little-endian IEEE-754 single)
pub const FLOAT_WIDTH: usize = std::mem::size_of::<f32>();

// ============================================================================
// QUERY EXPRESSION
// ============================================================================

/// SQL template used when binding a vector through a query builder
pub const VECTOR_EXPR_SQL: &str = "vector(?)";
