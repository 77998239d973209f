//! Axum-specific error types and mappings.
//!
//! Every failure leaves the server as JSON `{ "error": ..., "status": ... }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use larder_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Message returned for any recipe collaborator failure.
pub const RECIPE_FAILURE_MESSAGE: &str = "Failed to generate recipe";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An identical request is already running.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Service unavailable (e.g., OCR engine missing).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Conflict(msg)
            | Self::ServiceUnavailable(msg)
            | Self::Internal(msg) => msg,
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Settings(settings_err) => Self::BadRequest(settings_err.to_string()),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Busy(msg) => Self::Conflict(msg),
            // The reason can carry provider detail and is already logged by the service
            CoreError::RecipeGeneration(_) => Self::Internal(RECIPE_FAILURE_MESSAGE.to_string()),
            CoreError::Recognition(e) => Self::ServiceUnavailable(e.to_string()),
            CoreError::Capture(e) => Self::ServiceUnavailable(e.to_string()),
            CoreError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
        }
    }
}
