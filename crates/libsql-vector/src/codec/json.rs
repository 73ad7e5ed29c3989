//! JSON array encoding
//!
//! Vectors travel as bare arrays of numbers. Integral elements are written
//! as JSON integers (`[1,2,3]`, not `[1.0,2.0,3.0]`), matching how the
//! literal renders them; everything else uses the shortest `f32` text.
//! JSON has no spelling for NaN or infinities, so those fail to encode
//! instead of silently turning into `null`. Decoding rejects numbers beyond
//! the `f32` range instead of rounding them to infinity.

use crate::error::Result;
use serde::de::Error as _;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest magnitude below which every integral `f32` fits exactly in `i64`
const MAX_EXACT_INTEGER: f32 = 9_007_199_254_740_992.0;

/// Encode `values` as a JSON array
pub fn to_json(values: &[f32]) -> Result<String> {
    Ok(serde_json::to_string(&JsonFloats(values))?)
}

/// Decode a JSON array of numbers
///
/// Decoding failures are the untouched [`serde_json::Error`].
pub fn from_json(data: &[u8]) -> Result<Vec<f32>> {
    let elements: Vec<JsonFloat> = serde_json::from_slice(data)?;
    Ok(elements.into_iter().map(|element| element.0).collect())
}

/// Deserialize a sequence of numbers, rejecting any outside the `f32` range
pub fn deserialize_floats<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<f32>, D::Error> {
    let elements = Vec::<JsonFloat>::deserialize(deserializer)?;
    Ok(elements.into_iter().map(|element| element.0).collect())
}

/// Serialize `values` as a sequence of JSON numbers with the rules above
pub fn serialize_floats<S: Serializer>(
    values: &[f32],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        seq.serialize_element(&JsonFloat(*value))?;
    }
    seq.end()
}

struct JsonFloats<'a>(&'a [f32]);

impl Serialize for JsonFloats<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_floats(self.0, serializer)
    }
}

struct JsonFloat(f32);

impl Serialize for JsonFloat {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = self.0;
        if !value.is_finite() {
            return Err(S::Error::custom(format!(
                "{value} cannot be represented as a JSON number"
            )));
        }
        let is_negative_zero = value == 0.0 && value.is_sign_negative();
        if value.trunc() == value && value.abs() < MAX_EXACT_INTEGER && !is_negative_zero {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f32(value)
        }
    }
}

impl<'de> Deserialize<'de> for JsonFloat {
    #[allow(clippy::cast_possible_truncation)]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wide = f64::deserialize(deserializer)?;
        let value = wide as f32;
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(D::Error::custom(format!("{wide:e} is out of range for f32")))
        }
    }
}
