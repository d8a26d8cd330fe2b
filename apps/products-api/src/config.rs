//! Configuration for Products API

use axum_helpers::JwtConfig;
use core_config::{ConfigError, FromEnv, server::ServerConfig};
use database::sql::SqlConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: SqlConfig,
    pub jwt: JwtConfig,
}

impl Config {
    /// Read every section from the environment.
    ///
    /// A `.env` file, when present, is loaded first; variables already set win.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: SqlConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
        })
    }
}
