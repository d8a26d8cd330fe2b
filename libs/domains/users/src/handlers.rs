//! HTTP handlers for Users API
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `POST /` | 201 | 400 bad body or user could not be built, 500 storage |
//! | `POST /login` | 200 + `{"access_token"}` | 400 bad body, 404 unknown email, 401 wrong password, 500 otherwise |

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::{AppError, JsonBody};
use std::sync::Arc;

use crate::error::UserError;
use crate::models::{AccessToken, CreateUser, LoginRequest};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(register))
        .route("/login", post(login))
        .with_state(shared_service)
}

/// Anything but a failure to build the user is a storage failure
fn register_error(err: UserError) -> AppError {
    match err {
        UserError::PasswordHash(_) => err.into(),
        other => {
            tracing::error!("User registration failed: {}", other);
            AppError::InternalServerError("Failed to create user".to_string())
        }
    }
}

/// Only a missing user is 404; other store failures are 500, not folded into 404
fn login_error(err: UserError) -> AppError {
    match err {
        UserError::NotFound(_) | UserError::PasswordMismatch => err.into(),
        other => {
            tracing::error!("Login failed: {}", other);
            AppError::InternalServerError("Failed to log in".to_string())
        }
    }
}

async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> Result<StatusCode, AppError> {
    service.register(input).await.map_err(register_error)?;
    Ok(StatusCode::CREATED)
}

async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> Result<Json<AccessToken>, AppError> {
    let token = service.login(input).await.map_err(login_error)?;
    Ok(Json(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use axum::body::Body;
    use axum::http::Request;
    use axum_helpers::{JwtAuth, JwtConfig};
    use sea_orm::DbErr;
    use tower::ServiceExt;

    fn app(repo: MockUserRepository) -> Router {
        let jwt = JwtAuth::new(&JwtConfig::new("users-handlers-test-secret-0123456789").unwrap());
        router(UserService::new(repo, jwt))
    }

    fn login_request() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .body(Body::from(r#"{"email":"ada@example.com","password":"pw"}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_store_failure_is_500_not_404() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(UserError::Database(DbErr::Custom("connection reset".into()))));

        let response = app(repo).oneshot(login_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_404() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Err(UserError::NotFound(email.to_string())));

        let response = app(repo).oneshot(login_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
