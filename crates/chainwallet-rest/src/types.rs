//! Wire types: request/response envelopes, invocation mode, and client configuration.

use std::time::Duration;

use chainwallet_sign::{SignError, SignatureBuilder, SignatureParams, SignedPayload};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RestError;

/// Envelope error code the service uses for success.
pub const SUCCESS_CODE: i32 = 0;

/// Header selecting the invocation mode (`Bc-Invoke-Mode`).
pub const INVOKE_MODE_HEADER: &str = "bc-invoke-mode";

/// Header carrying the URL that receives transaction events (`Callback-Url`).
pub const CALLBACK_URL_HEADER: &str = "callback-url";

/// Header carrying the configured API key (`API-Key`).
pub const API_KEY_HEADER: &str = "api-key";

/// Whether the service answers before or after ledger confirmation.
///
/// Carried as a header only. The client-side envelope and decoding contract is
/// identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvokeMode {
    /// Return once the transaction is submitted; confirmation arrives by callback.
    #[default]
    Async,
    /// Block until the transaction is confirmed on the ledger.
    Sync,
}

impl InvokeMode {
    /// Header value for this mode. Async is expressed by omitting the header.
    pub fn header_value(self) -> Option<&'static str> {
        match self {
            InvokeMode::Async => None,
            InvokeMode::Sync => Some("sync"),
        }
    }

    /// Set or clear the invoke mode header in `headers`.
    pub fn apply(self, headers: &mut HeaderMap) {
        match self.header_value() {
            Some(value) => {
                headers.insert(INVOKE_MODE_HEADER, HeaderValue::from_static(value));
            }
            None => {
                headers.remove(INVOKE_MODE_HEADER);
            }
        }
    }

    /// Read the mode back from `headers`; anything but `sync` is async.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match headers.get(INVOKE_MODE_HEADER).and_then(|v| v.to_str().ok()) {
            Some(v) if v.eq_ignore_ascii_case("sync") => InvokeMode::Sync,
            _ => InvokeMode::Async,
        }
    }
}

/// Ask the service to deliver transaction events for this call to `url`.
///
/// The URL is not validated beyond being a legal header value.
pub fn set_callback_url(headers: &mut HeaderMap, url: &str) -> Result<(), RestError> {
    let value = HeaderValue::from_str(url)
        .map_err(|e| RestError::InvalidHeader(format!("{CALLBACK_URL_HEADER}: {e}")))?;
    headers.insert(CALLBACK_URL_HEADER, value);
    Ok(())
}

/// JSON request body of every signed call.
///
/// `signature` must have been computed over exactly `payload.as_bytes()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Serialized request payload.
    pub payload: String,
    /// Signature over `payload`.
    pub signature: SignedPayload,
}

impl RequestEnvelope {
    /// Wrap a payload string and a signature computed elsewhere.
    pub fn new(payload: String, signature: SignedPayload) -> Self {
        Self { payload, signature }
    }

    /// Sign `payload` with `builder` and wrap both.
    pub async fn sign(
        payload: String,
        builder: &SignatureBuilder,
        params: &SignatureParams,
    ) -> Result<Self, SignError> {
        let signature = builder.build(params, payload.as_bytes()).await?;
        Ok(Self { payload, signature })
    }
}

/// Uniform response body returned by every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// [`SUCCESS_CODE`] or a service-defined error code.
    #[serde(alias = "ErrCode")]
    pub err_code: i32,
    /// Error description, empty on success.
    #[serde(default, alias = "ErrMessage")]
    pub err_message: String,
    /// JSON-encoded result string. Opaque at this layer.
    #[serde(default, alias = "Payload")]
    pub payload: Option<Value>,
}

/// Configuration for a [`RestClient`](crate::RestClient).
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the wallet service (e.g. `https://wallet.example.com`).
    pub base_url: String,
    /// Optional API key sent via the `API-Key` header.
    pub api_key: Option<String>,
    /// Overall request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9143".to_string(),
            api_key: None,
            timeout: None,
        }
    }
}
