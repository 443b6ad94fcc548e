// src/providers/lenient.rs
//
// `deserialize_with` helpers for provider payloads. A field of the wrong type
// reads as missing instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Whole numbers. Floats are rounded, numeric strings are parsed.
pub fn int<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_int(&Value::deserialize(d)?))
}

pub fn float<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_float(&Value::deserialize(d)?))
}

/// Strings; a bare number keeps its JSON spelling (`62704` → `"62704"`).
pub fn string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub fn flag<'de, D>(d: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(d)?.as_bool())
}

/// Nested objects and maps: anything that doesn't fit becomes `T::default()`.
pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(d)?).unwrap_or_default())
}

fn as_float(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

fn as_int(v: &Value) -> Option<i64> {
    if let Some(i) = v.as_i64() {
        return Some(i);
    }
    as_float(v)
        .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f.round() as i64)
}
