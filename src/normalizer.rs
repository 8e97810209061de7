//! Turns whatever the backend sent into a stable client-side value.
//!
//! The backend is not consistent about response typing: the same endpoint may
//! answer with JSON, plain text, a boolean encoded as a string or number, or
//! nothing at all. [`decode`] reduces a response to a closed [`Payload`] and the
//! coercion functions map that onto the shape a call site expects.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Trimmed body was empty.
    Empty,
    Json(Value),
    Text(String),
}

pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    match content_type {
        Some(ct) => {
            let mime = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        }
        None => false,
    }
}

/// Decodes a body that has already been read in full as text.
///
/// Malformed JSON falls back to the trimmed text. A non-2xx status fails with
/// [`ClientError::RequestFailed`] whatever the body holds.
pub fn decode(status: u16, content_type: Option<&str>, body: &str) -> ClientResult<Payload> {
    let trimmed = body.trim();

    let payload = if trimmed.is_empty() {
        Payload::Empty
    } else if is_json_content_type(content_type) {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => Payload::Json(value),
            Err(e) => {
                warn!("Response claims JSON but failed to parse ({}), keeping raw text", e);
                Payload::Text(trimmed.to_string())
            }
        }
    } else {
        Payload::Text(trimmed.to_string())
    };

    if !(200..300).contains(&status) {
        let message = failure_message(status, &payload);
        debug!("Request failed with status {}: {}", status, message);
        return Err(ClientError::RequestFailed { status, message });
    }

    Ok(payload)
}

fn failure_message(status: u16, payload: &Payload) -> String {
    let extracted = match payload {
        Payload::Empty => None,
        Payload::Text(text) => Some(text.clone()),
        Payload::Json(Value::String(s)) => Some(s.clone()),
        Payload::Json(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| {
                map.get(*key)
                    .and_then(Value::as_str)
                    .filter(|msg| !msg.trim().is_empty())
            })
            .map(str::to_string)
            .or_else(|| Some(Value::Object(map.clone()).to_string())),
        Payload::Json(other) => Some(other.to_string()),
    };

    match extracted {
        Some(msg) if !msg.trim().is_empty() => msg,
        _ => format!("Request failed with status {}", status),
    }
}

pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1) || n.as_f64() == Some(1.0),
        Value::String(s) => flag_from_str(s),
        _ => false,
    }
}

fn flag_from_str(s: &str) -> bool {
    let s = s.trim();
    s == "1" || s.eq_ignore_ascii_case("true")
}

pub fn coerce_identifier(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

impl Payload {
    /// Boolean success flag. Anything unrecognised is `false`.
    pub fn into_flag(self) -> bool {
        match self {
            Payload::Empty => false,
            Payload::Json(value) => coerce_flag(&value),
            Payload::Text(text) => flag_from_str(&text),
        }
    }

    /// Newly issued identifier, or `""` when the body has no usable one.
    pub fn into_identifier(self) -> String {
        match self {
            Payload::Empty => String::new(),
            Payload::Json(value) => coerce_identifier(&value),
            Payload::Text(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Payload::Empty => String::new(),
            Payload::Text(text) => text,
            Payload::Json(Value::String(s)) => s,
            Payload::Json(other) => other.to_string(),
        }
    }

    /// List endpoints. Text is given one more JSON attempt for servers that
    /// leave out the content type.
    pub fn into_list<T: DeserializeOwned>(self) -> ClientResult<Vec<T>> {
        let value = match self {
            Payload::Empty => return Ok(Vec::new()),
            Payload::Json(value) => value,
            Payload::Text(text) => serde_json::from_str::<Value>(&text)
                .map_err(|_| ClientError::UnexpectedBody(text.clone()))?,
        };

        if value.is_null() {
            return Ok(Vec::new());
        }

        serde_json::from_value(value).map_err(|e| ClientError::UnexpectedBody(e.to_string()))
    }
}
