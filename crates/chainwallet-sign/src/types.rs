//! Signature types: parameters supplied per call and the signed wrapper sent on the wire.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Algorithm tag carried in every [`SignedPayload`].
pub const ALGORITHM_ED25519: &str = "ed25519";

/// Base64-encoded Ed25519 private key material.
///
/// Either a 32-byte seed or a 64-byte seed followed by its public key.
/// The buffer is wiped on drop and `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKeyMaterial(Zeroizing<String>);

impl PrivateKeyMaterial {
    /// Wrap already base64-encoded key material.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(Zeroizing::new(encoded.into()))
    }

    /// Encode raw key bytes (seed or keypair) as key material.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(BASE64.encode(bytes))
    }

    /// Returns true if no key material is present.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The base64 text of the key.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PrivateKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeyMaterial(<redacted>)")
    }
}

impl From<String> for PrivateKeyMaterial {
    fn from(encoded: String) -> Self {
        Self::new(encoded)
    }
}

impl From<&str> for PrivateKeyMaterial {
    fn from(encoded: &str) -> Self {
        Self::new(encoded)
    }
}

/// Per-call inputs to the [`SignatureBuilder`](crate::SignatureBuilder).
///
/// Never persisted. When the builder resolves keys through custody the
/// `private_key` field is ignored.
#[derive(Debug, Clone)]
pub struct SignatureParams {
    /// Identity (DID) of the signer.
    pub creator: String,
    /// Caller-chosen nonce, echoed in the signed payload.
    pub nonce: String,
    /// Private key of `creator`, if the caller holds it.
    pub private_key: Option<PrivateKeyMaterial>,
}

impl SignatureParams {
    /// Parameters for a caller that holds its own key.
    pub fn new(
        creator: impl Into<String>,
        nonce: impl Into<String>,
        private_key: PrivateKeyMaterial,
    ) -> Self {
        Self {
            creator: creator.into(),
            nonce: nonce.into(),
            private_key: Some(private_key),
        }
    }

    /// Parameters for a caller whose key is held by a custody service.
    pub fn custodial(creator: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            nonce: nonce.into(),
            private_key: None,
        }
    }
}

/// Signature attached to exactly one request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPayload {
    /// Identity that produced the signature.
    pub creator: String,
    /// Nonce from the signature params.
    pub nonce: String,
    /// Base64 of the 64-byte Ed25519 signature.
    pub signature_value: String,
    /// Signature algorithm, always [`ALGORITHM_ED25519`] for signatures built here.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String {
    ALGORITHM_ED25519.to_string()
}
