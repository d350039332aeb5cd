//! The user store interface consumed by the authentication core.

use async_trait::async_trait;

use keygate_core::result::AppResult;
use keygate_entity::user::{CreateUser, User, UserCredential, UserRole};

/// Persistent storage of users and their credentials.
///
/// Implementations must enforce email uniqueness themselves and report a
/// duplicate on [`create`](UserStore::create) as a `Conflict` error; callers
/// treat any earlier existence check as advisory only.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by identifier.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user and its password hash by exact email.
    async fn find_credential_by_email(&self, email: &str) -> AppResult<Option<UserCredential>>;

    /// Insert a user, returning it with its generated identifier.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Change a user's role. Returns `None` if the user does not exist.
    async fn update_role(&self, id: i64, role: UserRole) -> AppResult<Option<User>>;
}
