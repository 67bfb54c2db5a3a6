use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Candidate upload routes.
///
/// ```text
/// POST /upload-candidates    multipart spreadsheet upload
/// ```
///
/// The body limit replaces axum's 2 MB default for this route only.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/upload-candidates",
        post(handlers::candidates::upload_candidates)
            .layer(DefaultBodyLimit::max(max_upload_bytes)),
    )
}
