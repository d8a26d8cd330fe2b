//! Token signing configuration, loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_parse_or, env_required};
use std::fmt;

/// Minimum accepted length of the HMAC secret
pub const MIN_SECRET_LEN: usize = 32;

/// Default access token lifetime: 15 minutes
pub const ACCESS_TOKEN_TTL: u64 = 900;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required): at least 32 characters
/// - `JWT_EXPIRES_IN` (optional): token lifetime in seconds, default 900
#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        check_secret(&secret)?;
        Ok(Self {
            secret,
            expires_in_secs: ACCESS_TOKEN_TTL,
        })
    }

    pub fn with_expires_in(mut self, secs: u64) -> Self {
        self.expires_in_secs = secs;
        self
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    let len = secret.chars().count();
    if len < MIN_SECRET_LEN {
        return Err(ConfigError::parse(
            "JWT_SECRET",
            format!(
                "must be at least {MIN_SECRET_LEN} characters (got {len}). Generate one with: openssl rand -base64 32"
            ),
        ));
    }
    Ok(())
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        check_secret(&secret)?;

        let expires_in_secs = env_parse_or("JWT_EXPIRES_IN", ACCESS_TOKEN_TTL)?;
        if expires_in_secs == 0 {
            return Err(ConfigError::parse("JWT_EXPIRES_IN", "must be greater than zero"));
        }

        Ok(Self {
            secret,
            expires_in_secs,
        })
    }
}
