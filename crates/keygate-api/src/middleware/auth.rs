//! Authenticate middleware: bearer token to [`CurrentUser`].

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Rejects the request with 401 unless it carries a valid bearer token for
/// a user that still exists, then attaches that user as [`CurrentUser`].
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let user = state.authenticator.authenticate(header.as_deref()).await?;

    tracing::debug!(user_id = user.id, "Request authenticated");
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
