//! Asset and colored token operations.
//!
//! Issue and transfer calls run asynchronously by default: they return
//! without waiting for ledger confirmation. Set the `Bc-Invoke-Mode` header to
//! `sync` (see [`InvokeMode`](chainwallet_rest::InvokeMode)) to block until the
//! transaction is confirmed.
//!
//! Each call comes in two forms. The plain form takes a [`SignedPayload`] the
//! caller computed over [`canonical_payload`](crate::canonical_payload) of the
//! body. The `_signed` form has the SDK build the signature.

use chainwallet_sign::{SignatureParams, SignedPayload};
use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::client::WalletClient;
use crate::error::WalletError;
use crate::types::{
    Did, IssueAssetBody, IssueBody, LogType, TransactionLogs, TransferAssetBody, TransferBody,
    WalletResponse,
};

/// Path for colored token issuance.
pub const ISSUE_CTOKEN_PATH: &str = "/v1/transaction/tokens/issue";
/// Path for digital asset issuance.
pub const ISSUE_ASSET_PATH: &str = "/v1/transaction/assets/issue";
/// Path for colored token transfer.
pub const TRANSFER_CTOKEN_PATH: &str = "/v1/transaction/tokens/transfer";
/// Path for digital asset transfer.
pub const TRANSFER_ASSET_PATH: &str = "/v1/transaction/assets/transfer";
/// Path for transaction log queries.
pub const TRANSACTION_LOGS_PATH: &str = "/v1/transaction/logs";

impl WalletClient {
    /// Issue colored tokens with a caller-computed signature.
    pub async fn issue_ctoken(
        &self,
        headers: &HeaderMap,
        body: &IssueBody,
        signature: SignedPayload,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_presigned(Method::POST, ISSUE_CTOKEN_PATH, headers, body, signature)
            .await
    }

    /// Issue colored tokens, signing with `params`.
    pub async fn issue_ctoken_signed(
        &self,
        headers: &HeaderMap,
        body: &IssueBody,
        params: &SignatureParams,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_signed(Method::POST, ISSUE_CTOKEN_PATH, headers, body, params)
            .await
    }

    /// Issue a digital asset with a caller-computed signature.
    pub async fn issue_asset(
        &self,
        headers: &HeaderMap,
        body: &IssueAssetBody,
        signature: SignedPayload,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_presigned(Method::POST, ISSUE_ASSET_PATH, headers, body, signature)
            .await
    }

    /// Issue a digital asset, signing with `params`.
    pub async fn issue_asset_signed(
        &self,
        headers: &HeaderMap,
        body: &IssueAssetBody,
        params: &SignatureParams,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_signed(Method::POST, ISSUE_ASSET_PATH, headers, body, params)
            .await
    }

    /// Transfer colored tokens with a caller-computed signature.
    pub async fn transfer_ctoken(
        &self,
        headers: &HeaderMap,
        body: &TransferBody,
        signature: SignedPayload,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_presigned(Method::POST, TRANSFER_CTOKEN_PATH, headers, body, signature)
            .await
    }

    /// Transfer colored tokens, signing with `params`.
    pub async fn transfer_ctoken_signed(
        &self,
        headers: &HeaderMap,
        body: &TransferBody,
        params: &SignatureParams,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_signed(Method::POST, TRANSFER_CTOKEN_PATH, headers, body, params)
            .await
    }

    /// Transfer digital assets with a caller-computed signature.
    pub async fn transfer_asset(
        &self,
        headers: &HeaderMap,
        body: &TransferAssetBody,
        signature: SignedPayload,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_presigned(Method::POST, TRANSFER_ASSET_PATH, headers, body, signature)
            .await
    }

    /// Transfer digital assets, signing with `params`.
    pub async fn transfer_asset_signed(
        &self,
        headers: &HeaderMap,
        body: &TransferAssetBody,
        params: &SignatureParams,
    ) -> Result<WalletResponse, WalletError> {
        self.submit_signed(Method::POST, TRANSFER_ASSET_PATH, headers, body, params)
            .await
    }

    /// Query the income (`In`) or spending (`Out`) transaction logs of a wallet.
    pub async fn query_transaction_logs(
        &self,
        headers: &HeaderMap,
        id: &Did,
        log_type: LogType,
    ) -> Result<TransactionLogs, WalletError> {
        if id.is_empty() {
            return Err(WalletError::Precondition("request id must be set".to_string()));
        }

        self.query(
            TRANSACTION_LOGS_PATH,
            headers,
            &[("id", id.as_str()), ("type", log_type.as_str())],
        )
        .await
    }
}
