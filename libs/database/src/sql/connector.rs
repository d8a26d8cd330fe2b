use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;

/// Open a connection pool.
///
/// Fails fast: no retries, the caller decides whether the error is fatal.
pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.redacted_url();
    let db = Database::connect(config.into_connect_options()).await?;
    info!(%url, backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Apply every pending migration of `M`.
///
/// Migrations create their tables only when missing, so this is safe on every boot.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

/// Close the pool, waiting for checked-out connections to be returned.
pub async fn close(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await?;
    info!("Database connection closed");
    Ok(())
}
