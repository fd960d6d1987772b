//! Error types for the session API.
//!
//! [`ApiError`] is converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! body always carries a short `detail` string and the numeric status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crushsim_core::StoreError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested session or object does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// The error for an unknown or malformed session id.
    pub fn session_not_found() -> Self {
        Self::NotFound(String::from("Session not found"))
    }

    /// The error for an unknown catalog object id.
    pub fn object_not_found() -> Self {
        Self::NotFound(String::from("Object not found"))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SessionNotFound(_) => Self::session_not_found(),
            StoreError::ObjectNotFound(_) => Self::object_not_found(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = serde_json::json!({
            "detail": detail,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
