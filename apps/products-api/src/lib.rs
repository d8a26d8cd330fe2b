//! Products API
//!
//! REST service over two domains:
//!
//! ```text
//! /users           register, login        (public)
//! /products        product CRUD           (bearer token)
//!   ↓
//! domain_users / domain_products handlers
//!   ↓
//! SeaORM repositories (PostgreSQL or SQLite)
//! ```
//!
//! ## Modules
//!
//! - `api`: route assembly and auth layering
//! - `config`: environment configuration
//! - `state`: shared connection pool and token issuer

pub mod api;
pub mod config;
pub mod state;

use axum::Router;

pub use config::Config;
pub use state::AppState;

/// Full application router: API routes plus tracing, compression and the JSON 404 fallback
pub fn app(state: &AppState) -> Router {
    axum_helpers::create_router(api::routes(state))
}
