//! Deserializers for fields the gateway sends as either strings or numbers.
//!
//! Numbers keep their exact textual form; `serde_json` is built with
//! `arbitrary_precision`, so nothing is routed through `f64`.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

fn value_to_text<E: Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other @ (Value::Array(_) | Value::Object(_)) => {
            Err(E::custom(format!("expected string or number, got {other}")))
        }
    }
}

/// `Option<String>` from a string, number, boolean or null.
pub(crate) fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    value_to_text(Value::deserialize(deserializer)?)
}

/// `String` from a string, number, boolean or null; null becomes empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}

/// `bool` from a JSON boolean or its string form.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "y" => Ok(true),
            "false" | "0" | "n" | "" => Ok(false),
            _ => Err(D::Error::custom(format!("invalid boolean flag: {s}"))),
        },
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        other => Err(D::Error::custom(format!("invalid boolean flag: {other}"))),
    }
}
