//! Account details and document uploads.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tracing::info;

use super::error::{ApiError, Result};
use super::types::{AccountInfo, UploadReceipt};
use super::{DEFAULT_TIMEOUT, SlideSpeakClient, handle_response};

const ME_ENDPOINT: &str = "/me";
const UPLOAD_ENDPOINT: &str = "/document/upload";

impl SlideSpeakClient {
    /// Fetch the account behind the configured API key, including the
    /// remaining credit balance.
    pub async fn me(&self) -> Result<AccountInfo> {
        let response = self.get(ME_ENDPOINT, DEFAULT_TIMEOUT).send().await?;
        handle_response(response).await
    }

    /// Upload a local document so later generation requests can reference
    /// it by UUID.
    pub async fn upload_document(&self, path: &Path) -> Result<UploadReceipt> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ApiError::InvalidRequest(format!("'{}' is not a file path", path.display()))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ApiError::InvalidRequest(format!("cannot read '{}': {e}", path.display()))
        })?;

        info!(file = %file_name, size = bytes.len(), "uploading document");
        let part = Part::bytes(bytes).file_name(file_name);
        let form = Form::new().part("file", part);
        let response = self
            .post(UPLOAD_ENDPOINT, DEFAULT_TIMEOUT)
            .multipart(form)
            .send()
            .await?;
        handle_response(response).await
    }
}
