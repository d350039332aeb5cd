//! Session token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keygate_entity::user::{User, UserRole};

/// Claims payload carried by every session token.
///
/// Only trustworthy after [`JwtDecoder::decode`](super::JwtDecoder::decode)
/// has accepted the token that carried them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the user the token was issued to.
    pub user_id: i64,
    /// Email of the user at issuance.
    pub email: String,
    /// Role of the user at issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds claims for `user`, issued at `now` and valid for `ttl`.
    ///
    /// Returns `None` if the expiry falls outside the representable range.
    pub fn for_user(user: &User, now: DateTime<Utc>, ttl: chrono::Duration) -> Option<Self> {
        let exp = now.checked_add_signed(ttl)?;
        Some(Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }

    /// Whether the expiry instant is at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}
