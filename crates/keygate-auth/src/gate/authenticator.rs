//! Resolves a bearer token to the current stored user.

use std::sync::Arc;

use tracing::debug;

use keygate_core::error::AppError;
use keygate_database::UserStore;
use keygate_entity::user::User;

use super::bearer::extract_bearer;
use crate::jwt::JwtDecoder;

/// Turns an `Authorization` header into a live [`User`].
///
/// Claims are only used to locate the user. The returned identity always
/// comes from the store, so a role change takes effect on the next request
/// and a deleted user is refused even while their token is unexpired.
#[derive(Clone)]
pub struct Authenticator {
    decoder: JwtDecoder,
    store: Arc<dyn UserStore>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    /// Creates an authenticator over the given decoder and user store.
    pub fn new(decoder: JwtDecoder, store: Arc<dyn UserStore>) -> Self {
        Self { decoder, store }
    }

    /// Authenticates a request from its `Authorization` header value.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<User, AppError> {
        let token = extract_bearer(header)?;
        self.resolve(token).await
    }

    /// Verifies `token` and loads the user it names.
    pub async fn resolve(&self, token: &str) -> Result<User, AppError> {
        let claims = self.decoder.decode(token).map_err(|e| {
            debug!(reason = %e, "Token rejected");
            AppError::from(e)
        })?;

        self.store.find_by_id(claims.user_id).await?.ok_or_else(|| {
            debug!(user_id = claims.user_id, "Token names a user that no longer exists");
            AppError::unauthorized("User not found")
        })
    }
}
