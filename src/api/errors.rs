//! HTTP error translation.
//!
//! Every failure leaving a handler is an [`ApiError`]; `IntoResponse`
//! frames it as `{"error": message}` with the matching status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::repo::RepoError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Router-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Duplicate key on insert
    #[error("{0}")]
    Conflict(String),

    /// Missing row, empty filtered result, or unknown route
    #[error("{0}")]
    NotFound(String),

    /// Sort key outside {name, rating, rooms}
    #[error("Invalid sort type. Use 'name', 'rating', or 'rooms'.")]
    InvalidSortKey,

    /// Partial update with nothing to change
    #[error("No valid fields to update.")]
    NoFields,

    /// Malformed or missing JSON body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Non-numeric path identifier
    #[error("Invalid identifier '{0}'.")]
    InvalidId(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Backend failure, surfaced with the driver message
    #[error("Database error: {0}")]
    Backend(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidSortKey => StatusCode::BAD_REQUEST,
            ApiError::NoFields => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Conflict(msg) => ApiError::Conflict(msg),
            RepoError::NotFound(msg) => ApiError::NotFound(msg),
            RepoError::NoFields => ApiError::NoFields,
            RepoError::Backend(e) => ApiError::Backend(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
