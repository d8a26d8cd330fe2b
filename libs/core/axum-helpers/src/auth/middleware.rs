use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// JWT authentication middleware
///
/// Rejects the request with 401 unless it carries a valid, unexpired bearer
/// token. On success the decoded [`super::JwtClaims`] are inserted into the
/// request extensions.
///
/// ```ignore
/// let protected_routes = Router::new()
///     .route("/products", get(list))
///     .layer(axum::middleware::from_fn_with_state(
///         jwt_auth.clone(),
///         jwt_auth_middleware,
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_bearer_token(&headers) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(AppError::Unauthorized("No token provided".to_string()));
    };

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!("JWT verification failed: {:#}", e);
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{JwtClaims, JwtConfig};
    use axum::{
        Extension, Router, body::Body, http::StatusCode, middleware::from_fn_with_state,
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("middleware-test-secret-long-enough!!").unwrap())
    }

    fn app(auth: JwtAuth) -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|Extension(claims): Extension<JwtClaims>| async move { claims.sub }),
            )
            .layer(from_fn_with_state(auth, jwt_auth_middleware))
    }

    async fn call(auth: JwtAuth, header: Option<String>) -> (StatusCode, String) {
        let mut request = axum::http::Request::get("/whoami");
        if let Some(value) = header {
            request = request.header(AUTHORIZATION, value);
        }
        let response = app(auth)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));

        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_valid_token_passes_claims_through() {
        let auth = auth();
        let token = auth.create_token("user-7").unwrap();

        let (status, body) = call(auth, Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user-7");
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let (status, body) = call(auth(), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("UNAUTHORIZED"));
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let (status, _) = call(auth(), Some("Bearer nope".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
