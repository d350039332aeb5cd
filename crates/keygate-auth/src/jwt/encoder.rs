//! Session token creation with a configurable lifetime.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use keygate_core::config::AuthConfig;
use keygate_core::error::AppError;
use keygate_entity::user::User;

use super::claims::Claims;
use super::error::TokenError;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session token lifetime.
    ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails if `token_ttl_hours` does not yield a representable expiry.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.token_ttl_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_hours is out of range: {}",
                    config.token_ttl_hours
                ))
            })?;

        Ok(Self::with_ttl(config, ttl))
    }

    /// Creates an encoder with an explicit lifetime.
    ///
    /// A zero or negative lifetime produces tokens that are already expired,
    /// which tests use to exercise the expiry path.
    pub fn with_ttl(config: &AuthConfig, ttl: chrono::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        }
    }

    /// Issues a token for `user`, valid from now for the configured lifetime.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let claims = Claims::for_user(user, Utc::now(), self.ttl)
            .ok_or_else(|| TokenError::Encoding("token expiry is out of range".to_string()))?;
        self.sign(&claims)
    }

    /// Signs an arbitrary claims set.
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}
