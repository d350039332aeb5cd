//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered principal.
///
/// `id` and `email` never change once assigned. `role` changes only through
/// an administrative action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique email address, case-sensitive as stored.
    pub email: String,
    /// Current role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// A user together with its password hash.
///
/// Only read on the login path. Deliberately not `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredential {
    /// The identity the hash belongs to.
    #[sqlx(flatten)]
    pub user: User,
    /// One-way hash of the secret.
    pub password_hash: String,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}
