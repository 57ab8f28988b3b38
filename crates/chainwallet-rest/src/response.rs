//! Response Envelope Decoder.
//!
//! Two-stage decode: the outer [`ResponseEnvelope`] is parsed with an opaque
//! payload, its error code is checked, and only then is the nested JSON
//! string parsed into the type chosen by the call site. Each step
//! short-circuits on failure.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RestError;
use crate::types::{ResponseEnvelope, SUCCESS_CODE};

/// A fully read HTTP response. The transport body is already released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create from status and body.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode into `T`. Holds no state, so repeated calls give identical results.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        if self.status != StatusCode::OK {
            return Err(RestError::UnexpectedStatus {
                status_code: self.status.as_u16(),
                message: String::from_utf8_lossy(&self.body).into_owned(),
            });
        }

        decode_envelope(&self.body)?.payload_as()
    }
}

/// Parse the outer envelope only.
pub fn decode_envelope(body: &[u8]) -> Result<ResponseEnvelope, RestError> {
    Ok(serde_json::from_slice(body)?)
}

impl ResponseEnvelope {
    /// Returns true if `err_code` is [`SUCCESS_CODE`].
    pub fn is_success(&self) -> bool {
        self.err_code == SUCCESS_CODE
    }

    /// Check the error code, then parse the nested payload string into `T`.
    ///
    /// A missing or `null` payload on success is a type error, like any
    /// other non-string payload.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        if !self.is_success() {
            return Err(RestError::Remote {
                code: self.err_code,
                message: self.err_message.clone(),
            });
        }

        match &self.payload {
            Some(Value::String(nested)) => Ok(serde_json::from_str(nested)?),
            other => Err(RestError::PayloadType(
                json_type_name(other.as_ref()).to_string(),
            )),
        }
    }
}

fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None | Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
