//! In-memory user store for tests and single-process development runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use keygate_core::error::AppError;
use keygate_core::result::AppResult;
use keygate_entity::user::{CreateUser, User, UserCredential, UserRole};

use crate::store::UserStore;

#[derive(Debug, Default)]
struct InnerState {
    /// Last identifier handed out. Identifiers start at 1.
    last_id: i64,
    /// Rows keyed by identifier.
    rows: HashMap<i64, UserCredential>,
    /// Unique email index.
    by_email: HashMap<String, i64>,
}

/// User store backed by a Tokio mutex.
///
/// The email uniqueness check and the insert happen under one lock, so
/// concurrent signups with the same email yield exactly one row.
/// Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    state: Arc<Mutex<InnerState>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.state.lock().await.rows.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.rows.get(&id).map(|row| row.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .find_credential_by_email(email)
            .await?
            .map(|row| row.user))
    }

    async fn find_credential_by_email(&self, email: &str) -> AppResult<Option<UserCredential>> {
        let state = self.state.lock().await;
        Ok(state
            .by_email
            .get(email)
            .and_then(|id| state.rows.get(id))
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().await;

        if state.by_email.contains_key(&data.email) {
            return Err(AppError::conflict("User already exists"));
        }

        state.last_id += 1;
        let user = User {
            id: state.last_id,
            email: data.email.clone(),
            role: data.role,
            created_at: Utc::now(),
        };

        state.by_email.insert(user.email.clone(), user.id);
        state.rows.insert(
            user.id,
            UserCredential {
                user: user.clone(),
                password_hash: data.password_hash.clone(),
            },
        );

        Ok(user)
    }

    async fn update_role(&self, id: i64, role: UserRole) -> AppResult<Option<User>> {
        let mut state = self.state.lock().await;
        Ok(state.rows.get_mut(&id).map(|row| {
            row.user.role = role;
            row.user.clone()
        }))
    }
}
