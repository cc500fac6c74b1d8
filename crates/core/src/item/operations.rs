//! Pure functions used to turn a request body into an item.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::ItemError;

/// Generates an item ID of the form `item-<unix seconds>`.
///
/// Two creates within the same second get the same ID and the second one
/// overwrites the first.
pub fn generate_item_id(now: DateTime<Utc>) -> String {
    format!("item-{}", now.timestamp())
}

/// Formats a timestamp for `created_at` / `updated_at`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a request body into a JSON object.
///
/// Returns `Ok(None)` when there is nothing to work with: an empty body, or a
/// JSON value that carries no content (`null`, `false`, `0`, `""`, `[]`,
/// `{}`). Any other non-object value is rejected.
pub fn parse_json_object(body: &[u8]) -> Result<Option<Map<String, Value>>, ItemError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| ItemError::InvalidJson)?;

    if is_blank(&value) {
        return Ok(None);
    }

    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(ItemError::NotAnObject),
    }
}

/// Reads the optional `id` field of a request object.
pub(crate) fn read_id(map: &Map<String, Value>) -> Result<Option<String>, ItemError> {
    match map.get("id") {
        None => Ok(None),
        Some(Value::String(id)) if !id.is_empty() => Ok(Some(id.clone())),
        Some(_) => Err(ItemError::InvalidId),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
