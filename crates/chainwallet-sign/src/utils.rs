//! Utility functions: nonce generation.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;

/// Length in bytes of the random part of a generated nonce.
pub const NONCE_LENGTH: usize = 16;

/// Generate a random base64 nonce suitable for [`SignatureParams`](crate::SignatureParams).
pub fn random_nonce() -> String {
    let mut bytes = [0u8; NONCE_LENGTH];
    rand::thread_rng().fill_bytes(&mut bytes);
    BASE64.encode(bytes)
}
