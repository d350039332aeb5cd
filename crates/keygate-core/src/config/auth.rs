//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Signing key used when nothing else is configured. Local development only.
pub const INSECURE_DEFAULT_JWT_SECRET: &str = "keygate-insecure-dev-secret-change-me";

/// Token signing and lifetime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
}

impl AuthConfig {
    /// Whether the process is signing with the built-in development key.
    pub fn uses_insecure_default(&self) -> bool {
        self.jwt_secret == INSECURE_DEFAULT_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    INSECURE_DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    24
}
