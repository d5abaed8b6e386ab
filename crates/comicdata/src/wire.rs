//! Serde helpers shared by the model types
//!
//! Catalog payloads are decoded leniently: a field whose value does not fit
//! its declared type falls back to the type's default instead of failing the
//! whole payload. Lists are decoded element by element, so one bad element
//! becomes a default entry and its neighbours survive. Only structurally
//! invalid JSON is an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Deserialize a field, substituting `T::default()` on a type mismatch
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_value_or_default(value))
}

/// Deserialize a list, substituting `T::default()` for each bad element
///
/// A value that is not an array at all decodes to an empty list.
pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(elements) => Ok(elements.into_iter().map(from_value_or_default).collect()),
        Value::Null => Ok(Vec::new()),
        other => {
            debug!("Expected a list, got {}; using an empty list", other);
            Ok(Vec::new())
        }
    }
}

/// Deserialize an integer, accepting integral floats such as `1.0`
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let n = match &value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::Null => Some(0),
        _ => None,
    };

    Ok(n.unwrap_or_else(|| {
        debug!("Expected an integer, got {}; using 0", value);
        0
    }))
}

fn from_value_or_default<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        debug!("Field did not decode ({}); using default", e);
        T::default()
    })
}

pub(crate) fn is_zero(n: &i64) -> bool {
    *n == 0
}
