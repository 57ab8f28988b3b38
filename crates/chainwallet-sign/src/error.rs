//! Error types for signing operations.

/// Errors that can occur while building a request signature.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// A required signature parameter was empty.
    #[error("signature params invalid: missing {0}")]
    MissingField(&'static str),

    /// No private key was supplied and no custody service is configured.
    #[error("signature params invalid: missing private key")]
    MissingPrivateKey,

    /// The private key material could not be turned into an Ed25519 key.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Base64 decoding of key or signature material failed.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The signature does not verify against the payload.
    #[error("invalid signature")]
    InvalidSignature,

    /// The custody service holds no key for the identity.
    #[error("no private key in custody for {0}")]
    CustodyNotFound(String),

    /// The custody service refused to release the key.
    #[error("access to private key of {0} denied")]
    CustodyAccessDenied(String),

    /// The custody lookup failed for any other reason.
    #[error("key custody error: {0}")]
    Custody(String),
}
