//! Response body decoding, kept free of I/O so it can be tested on plain strings

use serde_json::Value;

use crate::error::ApiError;
use crate::models::Item;

/// Decode the body of `GET /items.php`
pub fn decode_item_list(body: &str) -> Result<Vec<Item>, ApiError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(rows) => rows
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(ApiError::from))
            .collect(),
        _ => Err(ApiError::UnexpectedShape(
            "Expected JSON array from list_items",
        )),
    }
}

/// Decode the body of `GET /items.php?id=..`
///
/// A `message` field means the server did not find the item.
pub fn decode_item(body: &str) -> Result<Item, ApiError> {
    let json: Value = serde_json::from_str(body)?;
    if let Some(message) = json.get("message") {
        return Err(ApiError::NotFound(message_text(message)));
    }
    if !json.is_object() {
        return Err(ApiError::UnexpectedShape("Expected JSON object from get_item"));
    }
    Ok(serde_json::from_value(json)?)
}

/// Decode a write response: the `message` field if present, else the raw body
pub fn decode_message(body: &str) -> Result<String, ApiError> {
    let json: Value = serde_json::from_str(body)?;
    match json.get("message") {
        Some(message) => Ok(message_text(message)),
        None => Ok(body.to_string()),
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
