//! Request Composer: method, path, headers, and body into a transport request.
//!
//! The composer passes caller headers through untouched. It never interprets
//! `Bc-Invoke-Mode` or `Callback-Url`; those are for the service.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::Method;

use crate::error::RestError;
use crate::types::RequestEnvelope;

/// Body of a wallet request.
#[derive(Debug)]
pub enum RequestBody {
    /// No body (queries).
    Empty,
    /// Signed JSON envelope.
    Envelope(RequestEnvelope),
    /// Finished multipart form (file uploads).
    Multipart(Form),
}

/// A composed, not yet dispatched, wallet request.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: RequestBody,
}

impl Request {
    /// Compose a request. Fails only on missing parameters, before any I/O.
    pub fn compose(
        method: Method,
        path: &str,
        headers: &HeaderMap,
        body: RequestBody,
    ) -> Result<Self, RestError> {
        if path.is_empty() {
            return Err(RestError::Precondition("request path must be set".to_string()));
        }
        if !path.starts_with('/') {
            return Err(RestError::Precondition(format!(
                "request path must be absolute: {path}"
            )));
        }

        Ok(Self {
            method,
            path: path.to_string(),
            headers: headers.clone(),
            query: Vec::new(),
            body,
        })
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the service base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Caller-supplied headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Query parameters in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Request body.
    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Build the transport request against `base_url`.
    ///
    /// `defaults` are applied first; caller headers win on conflict, except
    /// `Content-Type`, which a JSON or multipart body always sets.
    pub fn into_http(
        self,
        client: &reqwest::Client,
        base_url: &str,
        defaults: &HeaderMap,
    ) -> Result<reqwest::Request, RestError> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), self.path);

        let mut headers = defaults.clone();
        headers.extend(self.headers);
        if !matches!(self.body, RequestBody::Empty) {
            // The body sets its own content type.
            headers.remove(CONTENT_TYPE);
        }

        let mut builder = client.request(self.method, url).headers(headers);
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }

        builder = match self.body {
            RequestBody::Empty => builder,
            RequestBody::Envelope(envelope) => builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(serde_json::to_vec(&envelope)?),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        Ok(builder.build()?)
    }
}
