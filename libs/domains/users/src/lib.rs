//! Users Domain
//!
//! Registration and password login. A successful login yields a signed bearer
//! token for the protected routes of the application.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Password checks, token issuing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User entity with Argon2 hashing, request/response bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let jwt = JwtAuth::new(&JwtConfig::new("a-signing-secret-of-at-least-32-chars").unwrap());
//! let service = UserService::new(InMemoryUserRepository::new(), jwt);
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{AccessToken, CreateUser, LoginRequest, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use sql::SqlUserRepository;
