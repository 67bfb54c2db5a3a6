//! Response envelope for accepted uploads.
//!
//! Failure envelopes are produced by [`crate::error::AppError`].

use serde::Serialize;
use talent_core::record::PersistedCandidate;

/// Metadata of the multipart file part that was uploaded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub field_name: String,
    pub original_name: String,
    pub mime_type: String,
    /// Size in bytes.
    pub size: usize,
}

/// `{ "status": "success", "message": ..., "file": ..., "data": [...] }`
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub file: UploadedFile,
    pub data: Vec<PersistedCandidate>,
}

impl UploadResponse {
    pub fn success(file: UploadedFile, data: Vec<PersistedCandidate>) -> Self {
        Self {
            status: "success",
            message: "successfully uploaded",
            file,
            data,
        }
    }
}
