//! Proof-of-existence (POE) record operations.
//!
//! Create and update always sign through the client's Signature Builder, so
//! a client built with a custody key source needs no private key from the
//! caller.

use chainwallet_sign::SignatureParams;
use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::client::WalletClient;
use crate::error::WalletError;
use crate::types::{Did, PoeBody, PoePayload, WalletResponse};

/// Path for POE creation.
pub const CREATE_POE_PATH: &str = "/v1/poe/create";
/// Path for POE update.
pub const UPDATE_POE_PATH: &str = "/v1/poe/update";
/// Path for POE queries.
pub const QUERY_POE_PATH: &str = "/v1/poe";

impl WalletClient {
    /// Create a POE record.
    pub async fn create_poe(
        &self,
        headers: &HeaderMap,
        body: &PoeBody,
        params: &SignatureParams,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_signed(Method::POST, CREATE_POE_PATH, headers, body, params)
            .await
    }

    /// Update an existing POE record. `body.id` must be set.
    pub async fn update_poe(
        &self,
        headers: &HeaderMap,
        body: &PoeBody,
        params: &SignatureParams,
    ) -> Result<WalletResponse, WalletError> {
        if body.id.is_empty() {
            return Err(WalletError::Precondition("id must be set".to_string()));
        }
        self.submit_signed(Method::PUT, UPDATE_POE_PATH, headers, body, params)
            .await
    }

    /// Fetch a POE record by ID.
    pub async fn query_poe(&self, headers: &HeaderMap, id: &Did) -> Result<PoePayload, WalletError> {
        if id.is_empty() {
            return Err(WalletError::Precondition("request id must be set".to_string()));
        }
        self.query(QUERY_POE_PATH, headers, &[("id", id.as_str())]).await
    }
}
