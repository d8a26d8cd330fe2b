//! User Service - Business logic layer

use axum_helpers::JwtAuth;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{AccessToken, CreateUser, LoginRequest, User};
use crate::repository::UserRepository;

/// Service layer for registration and login
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    /// Hash the password and store the new user
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: CreateUser) -> UserResult<User> {
        let user = User::new(input.name, input.email, &input.password)?;
        self.repository.create(user).await
    }

    /// Check credentials and sign an access token whose subject is the user id
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginRequest) -> UserResult<AccessToken> {
        let user = self.repository.find_by_email(&input.email).await?;
        user.compare_password(&input.password)?;

        let access_token = self
            .jwt
            .create_token(&user.id.to_string())
            .map_err(|e| UserError::Token(format!("{:#}", e)))?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(AccessToken { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use axum_helpers::JwtConfig;

    fn jwt() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("user-service-test-secret-long-enough").unwrap())
    }

    #[tokio::test]
    async fn test_register_stores_hashed_user() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .withf(|u| u.email == "ada@example.com" && u.password_hash != "s3cret")
            .times(1)
            .returning(|u| Ok(u));

        let service = UserService::new(mock_repo, jwt());
        let user = service
            .register(CreateUser {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password: "s3cret".into(),
            })
            .await
            .unwrap();

        assert!(user.compare_password("s3cret").is_ok());
    }

    #[tokio::test]
    async fn test_register_propagates_duplicate() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .returning(|u| Err(UserError::DuplicateEmail(u.email)));

        let service = UserService::new(mock_repo, jwt());
        let err = service
            .register(CreateUser {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password: "s3cret".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user_id() {
        let user = User::new("Ada", "ada@example.com", "s3cret").unwrap();
        let user_id = user.id;

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "ada@example.com")
            .times(1)
            .returning(move |_| Ok(user.clone()));

        let auth = jwt();
        let service = UserService::new(mock_repo, auth.clone());
        let token = service
            .login(LoginRequest {
                email: "ada@example.com".into(),
                password: "s3cret".into(),
            })
            .await
            .unwrap();

        let claims = auth.verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = User::new("Ada", "ada@example.com", "s3cret").unwrap();

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(move |_| Ok(user.clone()));

        let service = UserService::new(mock_repo, jwt());
        let err = service
            .login(LoginRequest {
                email: "ada@example.com".into(),
                password: "guess".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::PasswordMismatch));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(|email| Err(UserError::NotFound(email.to_string())));

        let service = UserService::new(mock_repo, jwt());
        let err = service
            .login(LoginRequest {
                email: "ghost@example.com".into(),
                password: "whatever".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
    }
}
