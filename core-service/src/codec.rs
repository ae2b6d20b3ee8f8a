//! JSON method codec.
//!
//! Wire format shared with the host shell's JSON channels:
//!
//! | Message        | Encoding                                   |
//! |----------------|--------------------------------------------|
//! | method call    | `{"method": "<name>", "args": <value>}`    |
//! | success        | `[<result>]`                               |
//! | error          | `["<code>", "<message>" \| null, <details>]` |
//! | not implemented| empty reply                                |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, Result};

/// Error code returned when an incoming message cannot be decoded.
pub const INVALID_MESSAGE: &str = "invalid_message";

/// A named call arriving over the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    /// Absent and `null` both decode to [`Value::Null`].
    #[serde(rename = "args", default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = arguments;
        self
    }
}

/// Outcome of dispatching a [`MethodCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Value,
    },
    /// The channel has no handler for the method.
    NotImplemented,
}

impl MethodResult {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodResult::Error {
            code: code.into(),
            message: Some(message.into()),
            details: Value::Null,
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResult::NotImplemented)
    }
}

pub fn encode_call(call: &MethodCall) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(call)?)
}

pub fn decode_call(bytes: &[u8]) -> Result<MethodCall> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a reply envelope. Never fails: every variant maps onto a JSON value.
pub fn encode_result(result: &MethodResult) -> Vec<u8> {
    let envelope = match result {
        MethodResult::Success(value) => Value::Array(vec![value.clone()]),
        MethodResult::Error {
            code,
            message,
            details,
        } => Value::Array(vec![
            Value::String(code.clone()),
            message.clone().map_or(Value::Null, Value::String),
            details.clone(),
        ]),
        MethodResult::NotImplemented => return Vec::new(),
    };
    envelope.to_string().into_bytes()
}

/// Decode a reply envelope produced by [`encode_result`] or a host channel.
pub fn decode_envelope(bytes: &[u8]) -> Result<MethodResult> {
    if bytes.is_empty() {
        return Ok(MethodResult::NotImplemented);
    }

    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Array(mut items) = value else {
        return Err(CoreError::Codec("Envelope is not a JSON array".to_string()));
    };

    match items.len() {
        1 => Ok(MethodResult::Success(items.remove(0))),
        3 => {
            let details = items.remove(2);
            let message = match items.remove(1) {
                Value::Null => None,
                Value::String(message) => Some(message),
                other => {
                    return Err(CoreError::Codec(format!(
                        "Error message must be a string or null, got {}",
                        other
                    )))
                }
            };
            let Value::String(code) = items.remove(0) else {
                return Err(CoreError::Codec("Error code must be a string".to_string()));
            };
            Ok(MethodResult::Error {
                code,
                message,
                details,
            })
        }
        len => Err(CoreError::Codec(format!(
            "Envelope must have 1 or 3 elements, got {}",
            len
        ))),
    }
}
