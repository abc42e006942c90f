//! Request body validation.
//!
//! Required fields are checked all at once: a rejected request names every
//! field that is missing and every field that is unusable, not only the first.

use crate::error::ValidationError;
use serde_json::Value;

/// A validated measurement write: `{ "uid": <string>, <value_field>: <number> }`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRequest {
    pub uid: String,
    pub value: f64,
}

/// Parses a raw request body as JSON, whatever its declared content type.
///
/// An empty body yields `None` and is then validated like `{}`. Bytes that are
/// not JSON, including numbers outside the `f64` range, are rejected as an
/// unreadable body rather than reported as missing fields.
pub fn parse_body(bytes: &[u8]) -> Result<Option<Value>, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|_| ValidationError::unreadable_body())
}

/// Checks a measurement body, where `value_field` is `angle` or `distance`.
///
/// `None` stands for an empty body and is treated like an empty object. A
/// field is missing when absent or `null`. `uid` must be a non-empty string,
/// the same rule the store applies, and the value a finite JSON number; `0`
/// is accepted.
pub fn parse_measurement(
    body: Option<&Value>,
    value_field: &str,
) -> Result<MeasurementRequest, ValidationError> {
    let object = body.and_then(Value::as_object);
    let lookup = |name: &str| object.and_then(|o| o.get(name)).filter(|v| !v.is_null());

    let mut err = ValidationError::default();

    let uid = match lookup("uid") {
        None => {
            err.missing.push("uid".to_string());
            None
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(_) => {
            err.invalid.push("uid".to_string());
            None
        }
    };

    let value = match lookup(value_field) {
        None => {
            err.missing.push(value_field.to_string());
            None
        }
        Some(v) => match v.as_f64().filter(|n| n.is_finite()) {
            Some(n) => Some(n),
            None => {
                err.invalid.push(value_field.to_string());
                None
            }
        },
    };

    match (uid, value) {
        (Some(uid), Some(value)) if err.is_empty() => Ok(MeasurementRequest { uid, value }),
        _ => Err(err),
    }
}
