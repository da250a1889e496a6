//! Lenient argument decoding.
//!
//! Agents often send numbers as strings and ids as numbers; these accept
//! both, the way the tool schemas advertise.

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::Value;

/// `maxDepth`: a non-negative integer, or a string holding one.
pub fn opt_depth<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                return Ok(Some(u as usize));
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 => Ok(Some(f as usize)),
                _ => Err(de::Error::invalid_value(
                    Unexpected::Other(&n.to_string()),
                    &"a non-negative integer",
                )),
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&s), &"a non-negative integer")),
        Some(other) => Err(de::Error::invalid_type(unexpected(&other), &"a non-negative integer")),
    }
}

/// `trackId`: a string, or a number rendered as its decimal string.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::invalid_type(unexpected(&other), &"a string")),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
        _ => Unexpected::Other("value"),
    }
}

/// Schema for `maxDepth`.
pub fn depth_schema(_gen: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "integer",
        "minimum": 0,
        "maximum": palconf::MAX_DEPTH_LIMIT,
        "description": "max recursion depth (default 2, 0=no recursion)"
    })
}

/// Schema for `trackId`.
pub fn track_id_schema(_gen: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": ["string", "integer"],
        "description": "track ID to load into (uses selected track if omitted)"
    })
}
