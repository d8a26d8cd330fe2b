//! SQL connector (PostgreSQL in production, SQLite for local runs and tests)
//!
//! The backend is picked from the URL scheme by SeaORM.

mod config;
mod connector;

pub use config::SqlConfig;
pub use connector::{close, connect_from_config, run_migrations};

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
