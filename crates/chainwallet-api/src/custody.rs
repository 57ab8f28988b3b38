//! HTTP key custody: resolves private keys from the custody service.

use async_trait::async_trait;
use chainwallet_rest::{Request, RequestBody, RestClient, RestError};
use chainwallet_sign::{KeyCustody, PrivateKeyMaterial, SignError};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde::Deserialize;

/// Path for private key lookups.
pub const PRIVATE_KEY_PATH: &str = "/v1/keypair/private";
/// Header carrying the security code that unlocks a trusted key pair.
pub const SECURITY_CODE_HEADER: &str = "security-code";

#[derive(Deserialize)]
struct PrivateKeyPayload {
    private_key: String,
}

/// [`KeyCustody`] backed by the custody service's REST API.
#[derive(Debug, Clone)]
pub struct HttpKeyCustody {
    rest: RestClient,
    security_code: Option<String>,
}

impl HttpKeyCustody {
    /// Create a custody client on top of `rest`.
    pub fn new(rest: RestClient) -> Self {
        Self {
            rest,
            security_code: None,
        }
    }

    /// Send `code` with every lookup.
    pub fn with_security_code(mut self, code: impl Into<String>) -> Self {
        self.security_code = Some(code.into());
        self
    }

    fn build_headers(&self) -> Result<HeaderMap, SignError> {
        let mut headers = HeaderMap::new();
        if let Some(ref code) = self.security_code {
            let value = HeaderValue::from_str(code)
                .map_err(|e| SignError::Custody(format!("{SECURITY_CODE_HEADER}: {e}")))?;
            headers.insert(SECURITY_CODE_HEADER, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl KeyCustody for HttpKeyCustody {
    async fn private_key(&self, identity: &str) -> Result<PrivateKeyMaterial, SignError> {
        if identity.is_empty() {
            return Err(SignError::MissingField("creator"));
        }

        let headers = self.build_headers()?;
        let request = Request::compose(Method::GET, PRIVATE_KEY_PATH, &headers, RequestBody::Empty)
            .map_err(|e| custody_error(identity, e))?
            .with_query("id", identity);

        let payload: PrivateKeyPayload = self
            .rest
            .call(request)
            .await
            .map_err(|e| custody_error(identity, e))?;

        Ok(PrivateKeyMaterial::new(payload.private_key))
    }
}

fn custody_error(identity: &str, err: RestError) -> SignError {
    match err {
        RestError::UnexpectedStatus {
            status_code: 404, ..
        } => SignError::CustodyNotFound(identity.to_string()),
        RestError::UnexpectedStatus {
            status_code: 401 | 403,
            ..
        } => SignError::CustodyAccessDenied(identity.to_string()),
        other => SignError::Custody(other.to_string()),
    }
}
