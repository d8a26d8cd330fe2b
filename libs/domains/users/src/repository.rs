use async_trait::async_trait;
use entity_id::EntityId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; an email already in use is an error
    async fn create(&self, user: User) -> UserResult<User>;

    /// Exact-match lookup, `NotFound` if absent
    async fn find_by_email(&self, email: &str) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<EntityId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}
