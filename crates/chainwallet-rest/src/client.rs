//! Shared REST client: dispatches composed requests and decodes their envelopes.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::RestError;
use crate::request::Request;
use crate::response::RawResponse;
use crate::types::{RestConfig, API_KEY_HEADER};

/// HTTP client for the wallet service.
///
/// The underlying connection pool is shared by clones and by concurrent
/// calls; nothing in the client changes per request.
#[derive(Debug, Clone)]
pub struct RestClient {
    /// Client configuration.
    config: RestConfig,
    /// Headers sent with every request.
    default_headers: HeaderMap,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl RestClient {
    /// Create a client with its own connection pool.
    pub fn new(config: RestConfig) -> Result<Self, RestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Self::with_http_client(config, client)
    }

    /// Create a client on top of an existing `reqwest::Client`.
    ///
    /// `config.timeout` is ignored; the given client's own settings apply.
    pub fn with_http_client(config: RestConfig, client: reqwest::Client) -> Result<Self, RestError> {
        let default_headers = Self::build_headers(&config)?;
        Ok(Self {
            config,
            default_headers,
            client,
        })
    }

    /// Client configuration.
    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    /// Dispatch `request` and read the whole response.
    pub async fn send(&self, request: Request) -> Result<RawResponse, RestError> {
        let request =
            request.into_http(&self.client, &self.config.base_url, &self.default_headers)?;
        debug!(method = %request.method(), url = %request.url(), "dispatching wallet request");

        let resp = self.client.execute(request).await?;
        let status = resp.status();
        let body = resp.bytes().await?.to_vec();

        debug!(status = status.as_u16(), len = body.len(), "wallet response received");
        Ok(RawResponse::new(status, body))
    }

    /// Dispatch `request` and decode the nested payload into `T`.
    pub async fn call<T: DeserializeOwned>(&self, request: Request) -> Result<T, RestError> {
        let raw = self.send(request).await?;
        raw.decode().map_err(|err| {
            match &err {
                RestError::Remote { code, message } => {
                    warn!(code, message = %message, "wallet service rejected request");
                }
                RestError::UnexpectedStatus { status_code, .. } => {
                    warn!(status_code, "wallet service returned non-OK status");
                }
                _ => {}
            }
            err
        })
    }

    /// Build common headers from config.
    fn build_headers(config: &RestConfig) -> Result<HeaderMap, RestError> {
        let mut headers = HeaderMap::new();

        if let Some(ref key) = config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| RestError::InvalidHeader(format!("{API_KEY_HEADER}: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        Ok(headers)
    }
}
