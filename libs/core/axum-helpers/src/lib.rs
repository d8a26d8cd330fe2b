//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless JWT issuing/verification and route middleware
//! - **[`server`]**: router layering, serving, graceful shutdown
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: identifier path and JSON body extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let router = create_router(Router::new() /* add routes */);
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export auth types
pub use auth::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims, JwtConfig, jwt_auth_middleware};

// Re-export server types
pub use server::{
    ShutdownCoordinator, create_production_app, create_router, serve_until, shutdown_signal,
};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, JsonBody};
