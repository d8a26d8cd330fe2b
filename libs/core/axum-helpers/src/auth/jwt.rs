use super::config::JwtConfig;
use chrono::{Duration, Utc};
use eyre::WrapErr;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

/// Stateless HS256 token issuer and verifier.
///
/// Holds the signing key for the lifetime of the process; clone freely.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let ttl = i64::try_from(config.expires_in_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        tracing::info!(ttl_secs = ttl.num_seconds(), "JWT auth initialized");
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Sign a token for `subject`, expiring after the configured lifetime
    pub fn create_token(&self, subject: &str) -> eyre::Result<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| eyre::eyre!("Token lifetime overflows the clock"))?;
        let claims = JwtClaims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .wrap_err("Failed to sign access token")
    }

    /// Verify signature and expiry, then decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(token, &self.decoding, &self.validation)
            .wrap_err("Invalid access token")?;

        Ok(token_data.claims)
    }
}
