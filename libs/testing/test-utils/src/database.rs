//! In-memory SQL test infrastructure
//!
//! Every [`TestDatabase`] is a private SQLite database living in memory, with
//! the production migrations applied. Nothing to start, nothing to clean up.

use database::sql::{self, SqlConfig};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Test database wrapper
///
/// The pool holds exactly one connection that never expires, since an
/// in-memory SQLite database disappears with its last connection.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a fresh database with migrations applied
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let config = SqlConfig::new("sqlite::memory:").with_pool_size(1, 1);

        let connection = sql::connect_from_config(config)
            .await
            .expect("Failed to open in-memory test database");

        sql::run_migrations::<Migrator>(&connection, "test")
            .await
            .expect("Failed to run migrations on test database");

        tracing::debug!("Test database ready (SQLite, in-memory)");

        Self { connection }
    }

    /// Get a clone of the database connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    async fn table_count(db: &TestDatabase) -> i64 {
        let row = db
            .connection
            .query_one_raw(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM sqlite_master \
                 WHERE type = 'table' AND name IN ('products', 'users')",
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get("", "n").unwrap()
    }

    #[tokio::test]
    async fn test_database_has_schema() {
        let db = TestDatabase::new().await;
        assert_eq!(table_count(&db).await, 2);
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let a = TestDatabase::new().await;
        let b = TestDatabase::new().await;

        a.connection
            .execute_unprepared("DROP TABLE products")
            .await
            .unwrap();

        assert_eq!(table_count(&a).await, 1);
        assert_eq!(table_count(&b).await, 2);
    }
}
