//! `CurrentUser` extractor: the identity attached by the authenticate middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use keygate_core::error::AppError;
use keygate_entity::user::User;

use crate::error::ApiError;

/// The authenticated user for this request, freshly loaded from the store.
///
/// Inserted into request extensions by
/// [`authenticate`](crate::middleware::auth::authenticate).
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!(path = %parts.uri.path(), "CurrentUser requested on an unauthenticated route");
                AppError::internal("Route is missing the authenticate middleware").into()
            })
    }
}
