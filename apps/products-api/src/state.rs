//! Application state management

use axum_helpers::{JwtAuth, JwtConfig};
use sea_orm::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtAuth,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: &JwtConfig) -> Self {
        Self {
            db,
            jwt: JwtAuth::new(jwt),
        }
    }
}
