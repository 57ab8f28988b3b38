//! Wallet client: the fixed validate → sign → compose → send → decode sequence.

use chainwallet_rest::{Request, RequestBody, RequestEnvelope, RestClient, RestConfig, RestError};
use chainwallet_sign::{KeySource, SignatureBuilder, SignatureParams, SignedPayload};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::WalletError;
use crate::types::{check_required, RequiredFields};

/// Client for the wallet service operations.
///
/// Cheap to clone; clones share the connection pool and key source.
#[derive(Debug, Clone)]
pub struct WalletClient {
    /// Shared REST client.
    rest: RestClient,
    /// Signature Builder used by the SDK-signed operations.
    signer: SignatureBuilder,
}

impl WalletClient {
    /// Create a client whose callers supply their own private keys.
    pub fn new(config: RestConfig) -> Result<Self, WalletError> {
        Self::with_key_source(config, KeySource::Supplied)
    }

    /// Create a client that takes private keys from `source`.
    pub fn with_key_source(config: RestConfig, source: KeySource) -> Result<Self, WalletError> {
        Ok(Self::from_parts(
            RestClient::new(config)?,
            SignatureBuilder::new(source),
        ))
    }

    /// Assemble a client from an existing REST client and signature builder.
    pub fn from_parts(rest: RestClient, signer: SignatureBuilder) -> Self {
        Self { rest, signer }
    }

    /// The underlying REST client.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// The signature builder.
    pub fn signer(&self) -> &SignatureBuilder {
        &self.signer
    }

    /// Send `body` with a signature the caller computed over
    /// [`canonical_payload`]`(body)`.
    pub(crate) async fn submit_presigned<B, T>(
        &self,
        method: Method,
        path: &str,
        headers: &HeaderMap,
        body: &B,
        signature: SignedPayload,
    ) -> Result<T, WalletError>
    where
        B: Serialize + RequiredFields,
        T: DeserializeOwned,
    {
        check_required(body)?;
        let payload = canonical_payload(body)?;
        self.dispatch(method, path, headers, RequestEnvelope::new(payload, signature))
            .await
    }

    /// Serialize `body` once, sign exactly those bytes, and send.
    pub(crate) async fn submit_signed<B, T>(
        &self,
        method: Method,
        path: &str,
        headers: &HeaderMap,
        body: &B,
        params: &SignatureParams,
    ) -> Result<T, WalletError>
    where
        B: Serialize + RequiredFields,
        T: DeserializeOwned,
    {
        check_required(body)?;
        let payload = canonical_payload(body)?;
        let envelope = RequestEnvelope::sign(payload, &self.signer, params).await?;
        self.dispatch(method, path, headers, envelope).await
    }

    /// Send an unsigned GET with query parameters.
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &HeaderMap,
        params: &[(&str, &str)],
    ) -> Result<T, WalletError> {
        let mut request = Request::compose(Method::GET, path, headers, RequestBody::Empty)?;
        for (key, value) in params {
            request = request.with_query(key, value);
        }
        Ok(self.rest.call(request).await?)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        headers: &HeaderMap,
        envelope: RequestEnvelope,
    ) -> Result<T, WalletError> {
        let request = Request::compose(method, path, headers, RequestBody::Envelope(envelope))?;
        Ok(self.rest.call(request).await?)
    }
}

/// The exact payload string sent (and signed) for `body`.
///
/// Callers producing presigned requests must sign these bytes unchanged.
pub fn canonical_payload<B: Serialize>(body: &B) -> Result<String, WalletError> {
    Ok(serde_json::to_string(body).map_err(RestError::from)?)
}
