//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keygate_auth::IssuedSession;
use keygate_entity::user::{User, UserRole};

/// User summary for responses. Never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Signup, login and refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed session token.
    pub token: String,
    /// The authenticated user.
    pub user: UserResponse,
}

impl From<IssuedSession> for AuthResponse {
    fn from(session: IssuedSession) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}
