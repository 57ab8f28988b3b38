//! Multipart Upload Path: attach a local file to a POE record.
//!
//! The form carries the POE id and read-only flag first, then the file part.
//! The local file is opened, read completely, and closed before the request
//! is sent; `reqwest` writes the closing boundary when it encodes the form.

use std::io::ErrorKind;
use std::path::Path;

use chainwallet_rest::{Request, RequestBody, RestError};
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::client::WalletClient;
use crate::error::WalletError;
use crate::types::UploadResponse;

/// Path for POE file uploads.
pub const UPLOAD_POE_PATH: &str = "/v1/poe/upload";
/// Form field carrying the POE id.
pub const POE_ID_FIELD: &str = "poe_id";
/// Form field carrying the read-only flag (`"true"` / `"false"`).
pub const READ_ONLY_FIELD: &str = "read_only";
/// Form field carrying the file content.
pub const POE_FILE_FIELD: &str = "poe_file";

impl WalletClient {
    /// Upload `poe_file` and attach it to the POE record `poe_id`.
    ///
    /// Local failures come back as [`WalletError::FileNotFound`] or
    /// [`WalletError::Io`] without anything being sent.
    pub async fn upload_poe_file(
        &self,
        headers: &HeaderMap,
        poe_id: &str,
        poe_file: impl AsRef<Path>,
        read_only: bool,
    ) -> Result<UploadResponse, WalletError> {
        let poe_file = poe_file.as_ref();

        if poe_id.trim().is_empty() {
            return Err(WalletError::Precondition(
                "poe id must be set when uploading poe file".to_string(),
            ));
        }
        if poe_file.as_os_str().is_empty() {
            return Err(WalletError::Precondition(
                "poe file must be set when uploading poe file".to_string(),
            ));
        }

        let form = build_upload_form(poe_id, poe_file, read_only).await?;
        debug!(boundary = form.boundary(), "multipart/form-data body ready");
        let request =
            Request::compose(Method::POST, UPLOAD_POE_PATH, headers, RequestBody::Multipart(form))?;

        match self.rest().call(request).await {
            Ok(resp) => {
                debug!(poe_id, file = %poe_file.display(), "uploaded poe file");
                Ok(resp)
            }
            Err(err) => {
                warn!(poe_id, file = %poe_file.display(), error = %err, "upload poe file failed");
                Err(err.into())
            }
        }
    }
}

/// Build the multipart form for an upload.
pub async fn build_upload_form(
    poe_id: &str,
    poe_file: &Path,
    read_only: bool,
) -> Result<Form, WalletError> {
    let form = Form::new()
        .text(POE_ID_FIELD, poe_id.to_string())
        .text(READ_ONLY_FIELD, read_only.to_string());
    debug!(fields = ?[POE_ID_FIELD, READ_ONLY_FIELD], "wrote upload form fields");

    let contents = read_local_file(poe_file).await?;
    let file_name = poe_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| poe_file.display().to_string());

    let part = Part::bytes(contents)
        .file_name(file_name)
        .mime_str("application/octet-stream")
        .map_err(RestError::from)?;
    debug!(file = %poe_file.display(), "wrote file contents to form");

    Ok(form.part(POE_FILE_FIELD, part))
}

/// Read the whole file. The handle is closed when this returns, on every path.
async fn read_local_file(path: &Path) -> Result<Vec<u8>, WalletError> {
    let mut file = tokio::fs::File::open(path).await.map_err(|source| {
        warn!(file = %path.display(), error = %source, "open poe file failed");
        match source.kind() {
            ErrorKind::NotFound => WalletError::FileNotFound(path.to_path_buf()),
            _ => WalletError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    })?;
    debug!(file = %path.display(), "opened poe file");

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .await
        .map_err(|source| WalletError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(contents)
}
