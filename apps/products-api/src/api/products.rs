//! Products API routes

use axum::{Router, middleware::from_fn_with_state};
use axum_helpers::jwt_auth_middleware;
use domain_products::{ProductService, SqlProductRepository, handlers};

use crate::state::AppState;

/// Create products router; every route requires a bearer token
pub fn router(state: &AppState) -> Router {
    let repository = SqlProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service).layer(from_fn_with_state(state.jwt.clone(), jwt_auth_middleware))
}
