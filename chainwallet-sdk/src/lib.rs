#![deny(missing_docs)]

//! Chain Wallet SDK - Complete SDK.
//!
//! Re-exports all chain wallet SDK components for convenient single-crate usage.

pub use chainwallet_api as api;
pub use chainwallet_rest as rest;
pub use chainwallet_sign as sign;
