pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity_id::InvalidIdentifier;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "price is required"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this one; the variant picks
/// the status code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    InvalidId(#[from] InvalidIdentifier),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_)
            | AppError::InvalidId(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InvalidJson(_) => ErrorCode::InvalidJson,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let message = match self {
            AppError::Database(e) => {
                // Storage details stay in the logs
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                code.default_message().to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                msg
            }
            AppError::InvalidJson(msg) => {
                tracing::warn!(error_code = code.code(), "Invalid JSON body: {}", msg);
                msg
            }
            AppError::InvalidId(e) => {
                tracing::info!(error_code = code.code(), "{}", e);
                e.to_string()
            }
            AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "{}: {}", code, msg);
                msg
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
        });

        (status, body).into_response()
    }
}
