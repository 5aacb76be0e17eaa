use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// JSON body that may legitimately be absent.
///
/// An empty or whitespace-only body and the literal `null` both extract as
/// `None`, leaving the handler to decide how to answer a missing payload.
/// Anything else must be valid JSON for `T`. The `Content-Type` header is
/// not inspected. Bodies over the default body limit are rejected with 413.
#[derive(Debug, Clone, Default)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge {
                    message: rejection.body_text(),
                }
            } else {
                AppError::bad_request(rejection.body_text())
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJson(None));
        }

        serde_json::from_slice::<Option<T>>(&bytes)
            .map(OptionalJson)
            .map_err(|e| AppError::bad_request(format!("Invalid JSON payload: {e}")))
    }
}
