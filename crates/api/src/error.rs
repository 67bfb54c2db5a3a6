use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use talent_core::error::CoreError;
use talent_core::validation::report::RowError;

use crate::spreadsheet::SpreadsheetError;

/// Message returned alongside the row errors of a rejected upload.
pub const REJECTED_MESSAGE: &str = "Please resolve the errors and re-upload";

/// Message returned for every unexpected failure.
pub const GENERAL_ERROR_MESSAGE: &str = "General Error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ "status": "failure", ... }`
/// envelopes the upload client expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `talent_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The uploaded file could not be read as a spreadsheet.
    #[error(transparent)]
    Spreadsheet(#[from] SpreadsheetError),

    /// The multipart body could not be read, including bodies over the
    /// upload size limit.
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// One or more rows failed validation; nothing was stored.
    #[error("{} row validation error(s)", .0.len())]
    Rejected(Vec<RowError>),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Rejected(errors) => {
                let errors: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "status": "failure",
                        "message": REJECTED_MESSAGE,
                        "errors": errors,
                    }),
                )
            }
            AppError::BadRequest(msg) => bad_request(msg),
            AppError::Multipart(err) => (
                err.status(),
                json!({
                    "status": "failure",
                    "message": err.body_text(),
                }),
            ),
            AppError::Spreadsheet(err) => bad_request(err.to_string()),
            AppError::Core(CoreError::Validation(msg)) => bad_request(msg),
            AppError::Core(err) => {
                tracing::error!(error = %err, "Core error");
                general_error()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                general_error()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                general_error()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn bad_request(message: String) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({
            "status": "failure",
            "message": message,
        }),
    )
}

/// 500 with a sanitized body; details stay in the server log.
fn general_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "status": "failure",
            "message": GENERAL_ERROR_MESSAGE,
            "error": "An internal error occurred",
        }),
    )
}
