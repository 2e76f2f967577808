use serde_json::{Map, Value};

use crate::core::models::RawBody;
use crate::errors::WorkshopError;
use crate::prompt::DEFAULT_USER_INPUT;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method of a proxied request, for both API Gateway payload versions.
pub fn request_method(event: &Value) -> Option<&str> {
    v_str(event, &["requestContext", "http", "method"])
        .or_else(|| v_str(event, &["httpMethod"]))
}

pub fn is_preflight(event: &Value) -> bool {
    request_method(event).is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
}

/// A string `body` is an encoded payload; anything else means the event
/// itself carries the fields.
pub fn resolve_body(event: &Value) -> RawBody {
    match event.get("body") {
        Some(Value::String(text)) => RawBody::Text(text.clone()),
        _ => RawBody::Structured(event.clone()),
    }
}

/// # Errors
///
/// Returns `WorkshopError::InputError` if a text body is not valid JSON or
/// the resolved body is not a JSON object.
pub fn parse_body(raw: RawBody) -> Result<Map<String, Value>, WorkshopError> {
    let value = match raw {
        RawBody::Text(text) => serde_json::from_str::<Value>(&text)
            .map_err(|e| WorkshopError::InputError(format!("Invalid JSON body: {e}")))?,
        RawBody::Structured(value) => value,
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(WorkshopError::InputError(format!(
            "Expected a JSON object body, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Reads `user_input`, falling back to the workshop greeting when it is
/// missing or null. Non-string values are kept as their JSON text.
pub fn user_input_from(body: &Map<String, Value>) -> String {
    match body.get("user_input") {
        None | Some(Value::Null) => DEFAULT_USER_INPUT.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// # Errors
///
/// Returns `WorkshopError::InputError` if the body cannot be parsed.
pub fn extract_user_input(event: &Value) -> Result<String, WorkshopError> {
    let body = parse_body(resolve_body(event))?;
    Ok(user_input_from(&body))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
