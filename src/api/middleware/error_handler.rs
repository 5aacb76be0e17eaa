//! Error handler for converting AppError to HTTP responses.
//!
//! Error bodies are plain text so clients see exactly the message the
//! handler or service produced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - BadRequest → 400, message as body
    /// - PayloadTooLarge → 413, message as body
    /// - NotFound → 404, message as body or empty
    /// - Service → 500, service message as body
    /// - Internal → 500, generic body; details only go to the log
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        match self {
            AppError::BadRequest { message } | AppError::PayloadTooLarge { message } => {
                (status, message).into_response()
            }
            AppError::NotFound { message: Some(message) } => (status, message).into_response(),
            AppError::NotFound { message: None } => status.into_response(),
            AppError::Service(err) => (status, err.to_string()).into_response(),
            AppError::Internal { source } => {
                error!(error = ?source, "Internal error while handling request");
                (status, "An internal error occurred").into_response()
            }
        }
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
