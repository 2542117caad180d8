//! HTTP-facing error type.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jmerge_convert::ConvertError;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return. Each maps to one HTTP status plus a JSON
/// error body.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request was malformed (missing or invalid fields).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Reading the multipart upload failed.
    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    /// The conversion core failed to encode the artifact.
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Convert(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
