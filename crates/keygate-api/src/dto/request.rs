//! Request DTOs.

use serde::{Deserialize, Serialize};

use keygate_entity::user::UserRole;

/// Signup and login request body.
///
/// Missing fields deserialize as empty strings and are rejected by the
/// session issuer as invalid input.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Admin role change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// New role.
    pub role: UserRole,
}
