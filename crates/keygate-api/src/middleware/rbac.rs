//! Authorize middleware for role-gated routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use keygate_core::error::AppError;
use keygate_entity::user::UserRole;

use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Lets the request through only if the [`CurrentUser`] has exactly the
/// role given as layer state.
///
/// Must be layered inside [`authenticate`](super::auth::authenticate):
///
/// ```ignore
/// router
///     .route_layer(from_fn_with_state(UserRole::Admin, authorize))
///     .route_layer(from_fn_with_state(state.clone(), authenticate))
/// ```
pub async fn authorize(
    State(required): State<UserRole>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let current = request.extensions().get::<CurrentUser>();
    debug_assert!(
        current.is_some(),
        "authorize layer is mounted outside authenticate"
    );

    let Some(CurrentUser(user)) = current else {
        tracing::error!(path = %request.uri().path(), "authorize ran without an authenticated user");
        return Err(AppError::internal("Authorization ran before authentication").into());
    };

    keygate_auth::require_role(user, required)?;

    Ok(next.run(request).await)
}
