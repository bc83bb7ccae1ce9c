//! Lenient deserializers for SmartAPI numeric fields.
//!
//! SmartAPI sends the same numeric field as a JSON number on some endpoints
//! and as a string on others (`"10"`, `"194.00"`, sometimes `""`).

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Int(i64),
    Float(f64),
    Text(String),
}

/// `Option<f64>` from a number, a numeric string, an empty string or null.
pub(crate) fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    match Option::<Raw>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Int(n)) => Ok(Some(n as f64)),
        Some(Raw::Float(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// `Option<i64>` from an integer, an integer string, an empty string or null.
pub(crate) fn lenient_i64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    match Option::<Raw>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Int(n)) => Ok(Some(n)),
        Some(Raw::Float(n)) if n.fract() == 0.0 => Ok(Some(n as i64)),
        Some(Raw::Float(n)) => Err(serde::de::Error::custom(format!(
            "expected an integer, got {n}"
        ))),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}
