use thiserror::Error;

use crate::services::ServiceError;

/// Request-level error returned by handlers.
///
/// Client input problems become 400 (413 for oversized bodies), explicit "nothing there" outcomes
/// become 404 and service failures become 500 carrying the service message.
/// The HTTP mapping lives in `api::middleware::error_handler`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed client input
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Request body over the extractor's size limit
    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },

    /// Nothing to act on; `None` yields an empty body
    #[error("Not found")]
    NotFound { message: Option<String> },

    /// Failure reported by a service capability
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: Some(message.into()),
        }
    }

    /// 404 with an empty body
    pub fn not_found_empty() -> Self {
        AppError::NotFound { message: None }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
