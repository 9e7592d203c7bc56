//! Request payload and response helpers.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::BridgeError;

/// Request body sent along with an event.
pub type Payload = Map<String, Value>;

/// Builds a payload from any serializable value that encodes as a JSON object.
///
/// # Errors
/// Returns `BridgeError::Serialization` if the value is not an object.
pub fn payload_from<T: Serialize>(value: &T) -> Result<Payload, BridgeError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(BridgeError::serialization(format!(
            "payload must be an object, got {}",
            value_kind(&other)
        ))),
        Err(e) => Err(BridgeError::serialization(e.to_string())),
    }
}

/// Returns the host's rejection message if the response is a tagged failure.
///
/// A tagged failure is an object with `success: false`; the message comes from
/// its `error` field when present.
#[must_use]
pub fn tagged_failure(response: &Value) -> Option<String> {
    let object = response.as_object()?;

    match object.get("success") {
        Some(Value::Bool(false)) => Some(
            object
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("request rejected by backend")
                .to_string(),
        ),
        _ => None,
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
