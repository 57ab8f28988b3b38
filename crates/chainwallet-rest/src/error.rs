//! Error types for wallet REST calls.

/// Errors that can occur while composing, sending, or decoding a wallet call.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// A required request field was missing. Raised before any network I/O.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status other than 200 OK.
    #[error("server error ({status_code}): {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status_code: u16,
        /// Response body as text.
        message: String,
    },

    /// Malformed JSON in the response envelope or its nested payload, or a
    /// request body that could not be serialized.
    #[error("serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service rejected the call. Code and message are passed through verbatim.
    #[error("remote error ({code}): {message}")]
    Remote {
        /// Error code defined by the service.
        code: i32,
        /// Error message from the service.
        message: String,
    },

    /// Success code, but the payload was not a JSON string.
    #[error("response payload type invalid: {0}")]
    PayloadType(String),

    /// A header value could not be encoded.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl RestError {
    /// Returns true for connection failures, timeouts, and non-OK statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, RestError::Http(_) | RestError::UnexpectedStatus { .. })
    }

    /// The service-defined error code, if the service rejected the call.
    pub fn remote_code(&self) -> Option<i32> {
        match self {
            RestError::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}
