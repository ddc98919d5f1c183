use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::backend_client::BackendError;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed client input. The backend is never contacted.
    #[error("{0}")]
    Validation(String),

    /// The backend reported a failure; the message is relayed verbatim.
    #[error("{0}")]
    Upstream(String),

    /// Anything else. The cause is logged, never exposed.
    #[error("Internal server error")]
    Internal,
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Upstream { message, .. } => AppError::Upstream(message),
            BackendError::Request(e) => AppError::Upstream(e.to_string()),
            BackendError::InvalidResponse(_) => AppError::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}
