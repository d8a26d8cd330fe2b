use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

/// SeaORM-backed user store (PostgreSQL or SQLite)
#[derive(Clone)]
pub struct SqlUserRepository {
    db: DatabaseConnection,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// The unique index on `users.email` is the only uniqueness rule for users
fn insert_error(err: DbErr, email: &str) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail(email.to_string()),
        _ => UserError::Database(err),
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let active_model = entity::ActiveModel::from(&user);
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e, &user.email))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}
