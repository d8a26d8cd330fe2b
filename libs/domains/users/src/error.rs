use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("password mismatch")]
    PasswordMismatch,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

/// Default HTTP mapping; individual handlers may narrow it further
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound("User not found".to_string()),
            UserError::PasswordMismatch => {
                AppError::Unauthorized("Invalid email or password".to_string())
            }
            UserError::PasswordHash(msg) => AppError::Validation(msg),
            UserError::Database(e) => AppError::Database(e),
            storage @ (UserError::DuplicateEmail(_) | UserError::Token(_)) => {
                AppError::InternalServerError(storage.to_string())
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
