//! Transaction confirmation events delivered to a caller's callback URL.
//!
//! Delivery is at-least-once. The receiver must answer with
//! [`CALLBACK_ACK_STATUS`] or the service delivers again, and it is up to the
//! receiver to deduplicate by [`TransactionEvent::transaction_id`].

use chainwallet_rest::RestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WalletError;

/// HTTP status a callback receiver must return to acknowledge an event.
pub const CALLBACK_ACK_STATUS: u16 = 200;

/// A ledger confirmation for a call made with a `Callback-Url` header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEvent {
    /// Block that includes the transaction.
    #[serde(default)]
    pub block_number: u64,
    /// Hash of that block.
    #[serde(default)]
    pub block_hash: String,
    /// Ledger channel.
    #[serde(default)]
    pub channel_id: String,
    /// Chaincode that executed the transaction.
    #[serde(default)]
    pub chaincode_id: String,
    /// Transaction ID.
    pub transaction_id: String,
    /// Commit time (unix seconds).
    #[serde(default)]
    pub timestamp: i64,
    /// Set when the ledger marked the transaction invalid.
    #[serde(default)]
    pub is_invalid: bool,
    /// Operation-specific event data.
    #[serde(default)]
    pub payload: Value,
}

impl TransactionEvent {
    /// Decode a callback request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, WalletError> {
        Ok(serde_json::from_slice(body).map_err(RestError::from)?)
    }

    /// Returns true if the ledger accepted the transaction.
    pub fn is_valid(&self) -> bool {
        !self.is_invalid
    }
}
