//! Handler for bulk candidate uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use talent_core::ingest::IngestOutcome;

use crate::error::{AppError, AppResult};
use crate::response::{UploadResponse, UploadedFile};
use crate::spreadsheet;
use crate::state::AppState;

/// Multipart field that carries the spreadsheet.
pub const UPLOAD_FIELD: &str = "data";

/// POST /upload-candidates
///
/// Decode the spreadsheet in the `data` field, validate every row and store
/// the batch only when no row has an error. A rejected batch returns 400
/// with every row error.
pub async fn upload_candidates(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut upload: Option<(UploadedFile, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let original_name = field.file_name().unwrap_or_default().to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;

        let file = UploadedFile {
            field_name: UPLOAD_FIELD.to_string(),
            original_name,
            mime_type,
            size: bytes.len(),
        };
        upload = Some((file, bytes.to_vec()));
    }

    let (file, bytes) = upload.ok_or_else(|| {
        AppError::BadRequest(format!("Missing required '{UPLOAD_FIELD}' field"))
    })?;

    let rows = spreadsheet::decode(&file.original_name, Some(&file.mime_type), &bytes)?;
    if rows.is_empty() {
        return Err(AppError::BadRequest("Uploaded file has no data rows".into()));
    }

    tracing::info!(
        file = %file.original_name,
        size = file.size,
        rows = rows.len(),
        "Received candidate upload"
    );

    match state.ingestor.ingest(&rows).await? {
        IngestOutcome::Accepted(stored) => {
            tracing::info!(stored = stored.len(), "Candidate upload accepted");
            Ok(Json(UploadResponse::success(file, stored)))
        }
        IngestOutcome::Rejected(errors) => {
            tracing::info!(errors = errors.len(), "Candidate upload rejected");
            Err(AppError::Rejected(errors))
        }
    }
}
