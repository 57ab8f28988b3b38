//! Signature Builder: Ed25519 signatures over the exact payload bytes.
//!
//! The builder never re-serializes the payload. Whatever bytes are passed in
//! are the bytes that must travel in the request envelope.

use std::fmt;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ed25519_dalek::{
    Signature, Signer, SigningKey, Verifier, VerifyingKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::custody::KeyCustody;
use crate::error::SignError;
use crate::types::{PrivateKeyMaterial, SignatureParams, SignedPayload, ALGORITHM_ED25519};

/// Where the builder gets the private key from. Chosen once, at construction.
#[derive(Clone, Default)]
pub enum KeySource {
    /// The caller passes the key in [`SignatureParams::private_key`].
    #[default]
    Supplied,
    /// The key of [`SignatureParams::creator`] is looked up in a custody service.
    Custody(Arc<dyn KeyCustody>),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Supplied => f.write_str("Supplied"),
            KeySource::Custody(_) => f.write_str("Custody(..)"),
        }
    }
}

/// Builds the [`SignedPayload`] for one outbound call.
#[derive(Debug, Clone, Default)]
pub struct SignatureBuilder {
    source: KeySource,
}

impl SignatureBuilder {
    /// Create a builder that takes keys from `source`.
    pub fn new(source: KeySource) -> Self {
        Self { source }
    }

    /// The configured key source.
    pub fn source(&self) -> &KeySource {
        &self.source
    }

    /// Sign `payload` on behalf of `params.creator`.
    ///
    /// With [`KeySource::Custody`] this performs one custody lookup before
    /// signing; otherwise it has no side effects.
    pub async fn build(
        &self,
        params: &SignatureParams,
        payload: &[u8],
    ) -> Result<SignedPayload, SignError> {
        if params.creator.is_empty() {
            return Err(SignError::MissingField("creator"));
        }
        if params.nonce.is_empty() {
            return Err(SignError::MissingField("nonce"));
        }

        match &self.source {
            KeySource::Supplied => {
                let key = params
                    .private_key
                    .as_ref()
                    .filter(|key| !key.is_empty())
                    .ok_or(SignError::MissingPrivateKey)?;
                sign_payload(params, key, payload)
            }
            KeySource::Custody(custody) => {
                let key = custody.private_key(&params.creator).await?;
                debug!(creator = %params.creator, "resolved private key through custody");
                sign_payload(params, &key, payload)
            }
        }
    }
}

/// Sign `payload` with an explicit key.
pub fn sign_payload(
    params: &SignatureParams,
    key: &PrivateKeyMaterial,
    payload: &[u8],
) -> Result<SignedPayload, SignError> {
    let signing_key = signing_key(key)?;
    let signature = signing_key.sign(payload);

    Ok(SignedPayload {
        creator: params.creator.clone(),
        nonce: params.nonce.clone(),
        signature_value: BASE64.encode(signature.to_bytes()),
        algorithm: ALGORITHM_ED25519.to_string(),
    })
}

/// Derive the public key matching `key`.
pub fn public_key(key: &PrivateKeyMaterial) -> Result<VerifyingKey, SignError> {
    Ok(signing_key(key)?.verifying_key())
}

/// Check `signed` against `payload` and the signer's public key.
pub fn verify(
    signed: &SignedPayload,
    payload: &[u8],
    public_key: &VerifyingKey,
) -> Result<(), SignError> {
    if signed.algorithm != ALGORITHM_ED25519 {
        return Err(SignError::InvalidSignature);
    }

    let bytes = BASE64.decode(&signed.signature_value)?;
    let signature = Signature::from_slice(&bytes).map_err(|_| SignError::InvalidSignature)?;

    public_key
        .verify(payload, &signature)
        .map_err(|_| SignError::InvalidSignature)
}

fn signing_key(key: &PrivateKeyMaterial) -> Result<SigningKey, SignError> {
    let bytes = Zeroizing::new(BASE64.decode(key.expose().trim())?);

    match bytes.len() {
        SECRET_KEY_LENGTH => {
            let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
            seed.copy_from_slice(&bytes);
            Ok(SigningKey::from_bytes(&seed))
        }
        KEYPAIR_LENGTH => {
            let mut pair = Zeroizing::new([0u8; KEYPAIR_LENGTH]);
            pair.copy_from_slice(&bytes);
            SigningKey::from_keypair_bytes(&pair).map_err(|_| {
                SignError::InvalidPrivateKey("public key does not match seed".to_string())
            })
        }
        n => Err(SignError::InvalidPrivateKey(format!(
            "expected {SECRET_KEY_LENGTH} or {KEYPAIR_LENGTH} bytes, got {n}"
        ))),
    }
}
