#![deny(missing_docs)]

//! # chainwallet-sign
//!
//! Signature Builder for the chain wallet service.
//!
//! Every state-changing wallet call carries a JSON payload string and an
//! Ed25519 signature computed over exactly the bytes of that string. This
//! crate produces that signature, either from a private key the caller
//! supplies or from one resolved through a [`KeyCustody`] service.
//!
//! # Example
//!
//! ```no_run
//! use chainwallet_sign::{KeySource, PrivateKeyMaterial, SignatureBuilder, SignatureParams};
//!
//! # async fn example() -> Result<(), chainwallet_sign::SignError> {
//! let builder = SignatureBuilder::new(KeySource::Supplied);
//! let params = SignatureParams::new(
//!     "did:axn:alice",
//!     chainwallet_sign::random_nonce(),
//!     PrivateKeyMaterial::new("base64-ed25519-key"),
//! );
//! let payload = br#"{"owner":"did:axn:alice"}"#;
//! let signed = builder.build(&params, payload).await?;
//! println!("signature: {}", signed.signature_value);
//! # Ok(())
//! # }
//! ```

pub mod custody;
pub mod error;
pub mod signer;
pub mod types;
pub mod utils;


pub use custody::{KeyCustody, MemoryCustody};
pub use error::SignError;
pub use signer::{public_key, sign_payload, verify, KeySource, SignatureBuilder};
pub use types::{PrivateKeyMaterial, SignatureParams, SignedPayload, ALGORITHM_ED25519};
pub use utils::random_nonce;
