//! Relational storage plumbing shared by every service.
//!
//! ```ignore
//! use database::sql::{self, SqlConfig};
//! use core_config::FromEnv;
//! use migration::Migrator;
//!
//! let db = sql::connect_from_config(SqlConfig::from_env()?).await?;
//! sql::run_migrations::<Migrator>(&db, "products_api").await?;
//! ```

pub mod sql;
