use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use entity_id::EntityId;
use serde::{Deserialize, Serialize};

use crate::error::{UserError, UserResult};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    /// Login key, unique across users
    pub email: String,
    /// Argon2 PHC string (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Build a user with a fresh id, storing only a salted hash of `password`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> UserResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(Self {
            id: EntityId::new(),
            name: name.into(),
            email: email.into(),
            password_hash,
        })
    }

    /// Constant-time check of `candidate` against the stored hash.
    ///
    /// The parameters are read back from the PHC string, so hashes made with
    /// other Argon2 settings still verify.
    pub fn compare_password(&self, candidate: &str) -> UserResult<()> {
        let parsed = PasswordHash::new(&self.password_hash)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|_| UserError::PasswordMismatch)
    }
}

/// Body of `POST /users`. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}
