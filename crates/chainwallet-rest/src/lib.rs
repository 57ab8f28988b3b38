#![deny(missing_docs)]

//! # chainwallet-rest
//!
//! Signed-envelope request/response protocol of the chain wallet service.
//!
//! Every call follows the same sequence: compose a [`Request`] (JSON
//! [`RequestEnvelope`] or multipart body), dispatch it through a
//! [`RestClient`], then decode the error-coded [`ResponseEnvelope`] and the
//! JSON string nested inside its `payload` field.
//!
//! # Example
//!
//! ```no_run
//! use chainwallet_rest::{Request, RequestBody, RestClient, RestConfig};
//! use reqwest::header::HeaderMap;
//! use reqwest::Method;
//!
//! # async fn example() -> Result<(), chainwallet_rest::RestError> {
//! let client = RestClient::new(RestConfig {
//!     base_url: "https://wallet.example.com".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let request = Request::compose(Method::GET, "/v1/poe", &HeaderMap::new(), RequestBody::Empty)?
//!     .with_query("id", "did:axn:poe-1");
//! let poe: serde_json::Value = client.call(request).await?;
//! println!("POE: {poe}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::RestClient;
pub use error::RestError;
pub use request::{Request, RequestBody};
pub use response::{decode_envelope, RawResponse};
pub use types::{
    set_callback_url, InvokeMode, RequestEnvelope, ResponseEnvelope, RestConfig, API_KEY_HEADER,
    CALLBACK_URL_HEADER, INVOKE_MODE_HEADER, SUCCESS_CODE,
};
