//! The vector value type

use crate::adapters::driver::{self, DriverValue};
use crate::adapters::query::{self, SqlExpr};
use crate::codec::{binary, json, text};
use crate::error::{Error, Result};
use crate::ports::{BinaryCodec, DatabaseBindable, JsonCodec, QueryExpressible, TextCodec};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Value Object: `F32` vector embedding
///
/// An ordered sequence of `f32` that owns its buffer and converts losslessly
/// to and from the literal, binary and JSON representations.
///
/// ## Equality
///
/// Two vectors are equal when they have the same length and every element
/// has the same bit pattern. `0.0` and `-0.0` differ, and a NaN equals an
/// identical NaN, which makes `Vector` usable as `Eq` and `Hash`.
///
/// ## Zero value
///
/// `Vector::default()` is the empty vector. There is no separate
/// "uninitialized" state: every operation treats it exactly like
/// `Vector::new(vec![])`. A nullable column maps to `Option<Vector>`, see
/// [`Vector::scan_nullable`].
///
/// ## Example
///
/// ```
/// use libsql_vector::{BinaryCodec, Vector};
///
/// let vector = Vector::new(vec![1.0, 2.0, 3.0]);
/// let bytes = vector.encode_binary(Vec::new());
/// assert_eq!(bytes.len(), 12);
/// assert_eq!(Vector::from_bytes(&bytes).unwrap(), vector);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vector {
    values: Vec<f32>,
}

impl Vector {
    /// Create a vector that takes ownership of `values`
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Borrow the elements
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Take the element buffer
    pub fn into_inner(self) -> Vec<f32> {
        self.values
    }

    /// Decode the binary layout into a new vector
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        binary::decode_binary(bytes).map(Self::new)
    }

    /// Encode into a fresh byte buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        binary::encode_binary(&self.values, Vec::new())
    }

    /// Decode a JSON array into a new vector
    pub fn from_json(data: &[u8]) -> Result<Self> {
        json::from_json(data).map(Self::new)
    }

    /// Parse the bracket form alone, e.g. the output of `vector_extract()`
    pub fn from_brackets(input: &str) -> Result<Self> {
        text::parse_brackets(input).map(Self::new)
    }

    /// Scan a driver value from a nullable column
    ///
    /// `NULL` yields `None`; every other value goes through
    /// [`DatabaseBindable::scan`] rules.
    pub fn scan_nullable(src: &DriverValue) -> Result<Option<Self>> {
        if src.is_null() {
            return Ok(None);
        }
        driver::scan_floats(src).map(|values| Some(Self::new(values)))
    }
}

impl TextCodec for Vector {
    fn format_floats(&self) -> String {
        text::format_floats(&self.values)
    }

    fn to_literal(&self) -> String {
        text::format_literal(&self.values)
    }

    fn parse(&mut self, input: &str) -> Result<()> {
        self.values = text::parse_literal(input)?;
        Ok(())
    }
}

impl BinaryCodec for Vector {
    fn encode_binary(&self, buf: Vec<u8>) -> Vec<u8> {
        binary::encode_binary(&self.values, buf)
    }

    fn decode_binary(&mut self, buf: &[u8]) -> Result<()> {
        self.values = binary::decode_binary(buf)?;
        Ok(())
    }
}

impl JsonCodec for Vector {
    fn marshal_json(&self) -> Result<String> {
        json::to_json(&self.values)
    }

    fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        self.values = json::from_json(data)?;
        Ok(())
    }
}

impl DatabaseBindable for Vector {
    fn scan(&mut self, src: &DriverValue) -> Result<()> {
        self.values = driver::scan_floats(src)?;
        Ok(())
    }

    fn value(&self) -> DriverValue {
        driver::literal_value(&self.values)
    }
}

impl QueryExpressible for Vector {
    fn query_expr(&self) -> SqlExpr {
        query::vector_expr(&self.values)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.len().hash(state);
        for value in &self.values {
            value.to_bits().hash(state);
        }
    }
}

/// Displays as the database literal
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

/// Parses the database literal
impl FromStr for Vector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        text::parse_literal(s).map(Self::new)
    }
}

impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        json::serialize_floats(&self.values, serializer)
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        json::deserialize_floats(deserializer).map(Self::new)
    }
}

impl From<Vec<f32>> for Vector {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for Vector {
    fn from(values: &[f32]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<Vector> for Vec<f32> {
    fn from(vector: Vector) -> Self {
        vector.into_inner()
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[f32]> for Vector {
    fn as_ref(&self) -> &[f32] {
        &self.values
    }
}

impl From<&Vector> for DriverValue {
    fn from(vector: &Vector) -> Self {
        vector.value()
    }
}

impl From<Vector> for DriverValue {
    fn from(vector: Vector) -> Self {
        vector.value()
    }
}

impl TryFrom<&DriverValue> for Vector {
    type Error = Error;

    fn try_from(src: &DriverValue) -> Result<Self> {
        driver::scan_floats(src).map(Self::new)
    }
}

impl TryFrom<DriverValue> for Vector {
    type Error = Error;

    fn try_from(src: DriverValue) -> Result<Self> {
        Self::try_from(&src)
    }
}
