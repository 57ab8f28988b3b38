//! Key custody capability.
//!
//! A custody service holds private keys on behalf of identities and releases
//! them to authorized callers. The HTTP implementation lives in
//! `chainwallet-api`; [`MemoryCustody`] is an in-process stand-in.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::SignError;
use crate::types::PrivateKeyMaterial;

/// Resolves the private key of an identity.
#[async_trait]
pub trait KeyCustody: Send + Sync {
    /// Fetch the key of `identity`.
    ///
    /// Fails with [`SignError::CustodyNotFound`] or
    /// [`SignError::CustodyAccessDenied`] when the service refuses.
    async fn private_key(&self, identity: &str) -> Result<PrivateKeyMaterial, SignError>;
}

/// Custody backed by an in-memory map, built up front and never mutated.
#[derive(Debug, Clone, Default)]
pub struct MemoryCustody {
    keys: HashMap<String, PrivateKeyMaterial>,
}

impl MemoryCustody {
    /// Create an empty custody store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the key of `identity`.
    pub fn with_key(mut self, identity: impl Into<String>, key: PrivateKeyMaterial) -> Self {
        self.keys.insert(identity.into(), key);
        self
    }
}

#[async_trait]
impl KeyCustody for MemoryCustody {
    async fn private_key(&self, identity: &str) -> Result<PrivateKeyMaterial, SignError> {
        self.keys
            .get(identity)
            .cloned()
            .ok_or_else(|| SignError::CustodyNotFound(identity.to_string()))
    }
}
