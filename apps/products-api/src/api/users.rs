//! Users API routes

use axum::Router;
use domain_users::{SqlUserRepository, UserService, handlers};

use crate::state::AppState;

/// Create users router (registration and login are public)
pub fn router(state: &AppState) -> Router {
    let repository = SqlUserRepository::new(state.db.clone());
    let service = UserService::new(repository, state.jwt.clone());
    handlers::router(service)
}
