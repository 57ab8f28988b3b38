#![deny(missing_docs)]

//! # chainwallet-api
//!
//! Operations of the chain wallet service: issuing and transferring
//! digital assets and colored tokens, querying transaction logs, and
//! creating, updating, querying, and attaching files to proof-of-existence
//! (POE) records.
//!
//! Every operation validates its required fields, optionally signs the
//! serialized payload, composes the request, sends it, and decodes the
//! response envelope into the operation's result type. Operations share no
//! mutable state; concurrent calls on one [`WalletClient`] only share the
//! connection pool.
//!
//! # Example
//!
//! ```no_run
//! use chainwallet_api::{Did, IssueBody, WalletClient};
//! use chainwallet_rest::{InvokeMode, RestConfig};
//! use chainwallet_sign::{random_nonce, PrivateKeyMaterial, SignatureParams};
//! use reqwest::header::HeaderMap;
//!
//! # async fn example() -> Result<(), chainwallet_api::WalletError> {
//! let client = WalletClient::new(RestConfig {
//!     base_url: "https://wallet.example.com".to_string(),
//!     api_key: Some("my-key".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let mut headers = HeaderMap::new();
//! InvokeMode::Sync.apply(&mut headers);
//!
//! let body = IssueBody {
//!     issuer: Did::from("did:axn:issuer"),
//!     owner: Did::from("did:axn:owner"),
//!     asset_id: Did::from("did:axn:asset"),
//!     amount: 1000,
//!     fee: None,
//! };
//! let params = SignatureParams::new(
//!     "did:axn:issuer",
//!     random_nonce(),
//!     PrivateKeyMaterial::new("base64-ed25519-key"),
//! );
//! let resp = client.issue_ctoken_signed(&headers, &body, &params).await?;
//! println!("token: {}", resp.token_id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod custody;
pub mod error;
pub mod event;
pub mod poe;
pub mod transaction;
pub mod types;
pub mod upload;


pub use client::{canonical_payload, WalletClient};
pub use custody::HttpKeyCustody;
pub use error::WalletError;
pub use event::{TransactionEvent, CALLBACK_ACK_STATUS};
pub use types::*;
