//! Lenient deserializers for remote records.
//!
//! The remote API is loose about scalar types: the same attribute arrives as
//! `"1234"` from one method and `1234` from another, and missing values come
//! back as `""` or `null`.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Accepts a string, number or bool and keeps it as text. `null` maps to `None`.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::custom(format!("expected a scalar, got {other}"))),
    }
}

/// Accepts an integer or a numeric string. `null` and `""` map to `None`.
pub fn uint<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        value => value_to_u64(&value).map(Some).map_err(de::Error::custom),
    }
}

/// Accepts a list of integers or numeric strings. `null` and `""` map to empty.
pub fn uint_list<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| value_to_u64(item).map_err(de::Error::custom))
            .collect(),
        other => Err(de::Error::custom(format!("expected a list, got {other}"))),
    }
}

/// Accepts a list of scalars, kept as text.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(de::Error::custom(format!("expected a scalar, got {other}"))),
            })
            .collect(),
        other => Err(de::Error::custom(format!("expected a list, got {other}"))),
    }
}

/// Accepts a nested record. Anything that is not an object (`""`, `null`) maps to `None`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => T::deserialize(Value::Object(map))
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// Integer coercion shared by ids and counters.
pub fn value_to_u64(value: &Value) -> Result<u64, String> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| format!("not an unsigned integer: {n}")),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("not an integer: {s:?}")),
        other => Err(format!("not an integer: {other}")),
    }
}
