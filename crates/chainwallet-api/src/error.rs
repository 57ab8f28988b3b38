//! Error types for wallet operations.

use std::path::PathBuf;

use chainwallet_rest::RestError;
use chainwallet_sign::SignError;

/// Errors returned by [`WalletClient`](crate::WalletClient) operations.
///
/// Local problems (`Precondition`, `Signing`, `FileNotFound`, `Io`) are kept
/// apart from transport faults and remote rejections inside `Rest`.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// A required field was empty. No request was sent.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Building the request signature failed.
    #[error("signing error: {0}")]
    Signing(#[from] SignError),

    /// Transport, decoding, or remote rejection.
    #[error(transparent)]
    Rest(RestError),

    /// The local file to upload does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading the local file to upload failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl WalletError {
    /// The service-defined error code, if the service rejected the call.
    pub fn remote_code(&self) -> Option<i32> {
        match self {
            WalletError::Rest(err) => err.remote_code(),
            _ => None,
        }
    }

    /// Returns true if the service explicitly rejected the call.
    pub fn is_remote_rejection(&self) -> bool {
        self.remote_code().is_some()
    }

    /// Returns true if the call failed before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            WalletError::Precondition(_)
                | WalletError::Signing(_)
                | WalletError::FileNotFound(_)
                | WalletError::Io { .. }
        )
    }
}

impl From<RestError> for WalletError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Precondition(message) => WalletError::Precondition(message),
            other => WalletError::Rest(other),
        }
    }
}
