//! Error types for the API server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::validation::ValidationError;
use database::DatabaseError;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Database error.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::Database(DatabaseError::DuplicateUsername { .. }) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            ApiError::Database(DatabaseError::UnknownUser { .. }) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Database(DatabaseError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
