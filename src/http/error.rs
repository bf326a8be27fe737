//! API error taxonomy and response mapping.
//!
//! # Design Decisions
//! - Client faults carry a short plain-text body; nothing more
//! - Encoding failures are an internal fault: logged in full, reported
//!   generically so internal state never leaks

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Errors a handler can produce, each with a fixed HTTP mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed payload or missing required fields/identifier.
    #[error("{0}")]
    BadInput(String),

    /// Create collided with an existing id.
    #[error("user {0} already exists")]
    Conflict(String),

    /// No record for the requested id.
    #[error("user {0} not found")]
    NotFound(String),

    /// Response body serialization failed.
    #[error("response encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(id) => ApiError::Conflict(id),
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Encoding(e) => {
                tracing::error!(error = %e, "Response encoding failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            other => (other.status(), other.to_string()).into_response(),
        }
    }
}

/// Encode `value` as a JSON response with the given status.
///
/// Encoding happens here, explicitly, so a failure surfaces as
/// [`ApiError::Encoding`] instead of a panic inside a responder.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
