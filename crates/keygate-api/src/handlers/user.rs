//! Self-service handlers for the authenticated user.

use axum::Json;

use crate::dto::response::UserResponse;
use crate::extractors::CurrentUser;

/// GET /api/v1/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}
