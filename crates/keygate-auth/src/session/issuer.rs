//! Session issuance flows: signup, login, and refresh.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use keygate_core::error::{AppError, ErrorKind};
use keygate_database::UserStore;
use keygate_entity::user::{CreateUser, User, UserRole};

use crate::gate::Authenticator;
use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

/// A freshly minted token and the identity it was minted for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedSession {
    /// Signed session token.
    pub token: String,
    /// The identity, without credential material.
    pub user: User,
}

/// Issues session tokens against the user store.
#[derive(Clone)]
pub struct SessionIssuer {
    store: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    authenticator: Authenticator,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

impl SessionIssuer {
    /// Creates a new issuer with all required dependencies.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        authenticator: Authenticator,
    ) -> Self {
        Self {
            store,
            hasher,
            encoder,
            authenticator,
        }
    }

    /// Registers a new user with role `user` and issues a token for them.
    pub async fn signup(&self, email: &str, password: &str) -> Result<IssuedSession, AppError> {
        require_fields(email, password)?;

        if self.store.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hash(password).await?;
        let user = self
            .store
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                role: UserRole::User,
            })
            .await
            .inspect_err(|e| {
                if e.kind == ErrorKind::Conflict {
                    warn!("Concurrent signup for the same email lost the insert race");
                }
            })?;

        info!(user_id = user.id, "User signed up");
        self.issue(user)
    }

    /// Verifies a user's password and issues a token.
    ///
    /// An unknown email and a wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AppError> {
        require_fields(email, password)?;

        let Some(credential) = self.store.find_credential_by_email(email).await? else {
            warn!(reason = "unknown_email", "Login failed");
            return Err(AppError::invalid_credentials());
        };

        if !self.verify(password, &credential.password_hash).await? {
            warn!(user_id = credential.user.id, reason = "wrong_password", "Login failed");
            return Err(AppError::invalid_credentials());
        }

        info!(user_id = credential.user.id, "User logged in");
        self.issue(credential.user)
    }

    /// Issues a new token for the holder of a valid bearer token.
    ///
    /// The new token carries the user's current role from the store, not the
    /// role embedded in the presented token.
    pub async fn refresh(&self, authorization: Option<&str>) -> Result<IssuedSession, AppError> {
        let user = self.authenticator.authenticate(authorization).await?;
        info!(user_id = user.id, "Session refreshed");
        self.issue(user)
    }

    fn issue(&self, user: User) -> Result<IssuedSession, AppError> {
        let token = self.encoder.issue(&user)?;
        Ok(IssuedSession { token, user })
    }

    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
    }
}

fn require_fields(email: &str, password: &str) -> Result<(), AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("Email and password are required"));
    }
    Ok(())
}
