//! Authentication module.
//!
//! Stateless JWT (HS256) issuing and verification, plus the middleware that
//! guards protected routes.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/products", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::{ACCESS_TOKEN_TTL, JwtConfig};
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::jwt_auth_middleware;
