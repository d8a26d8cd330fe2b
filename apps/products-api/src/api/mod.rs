//! API routes module

pub mod products;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/users", users::router(state))
}
