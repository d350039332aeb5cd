//! `Authorization: Bearer <token>` parsing.

use keygate_core::error::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from an `Authorization` header value.
///
/// The header must start with the case-sensitive prefix `Bearer `. The rest
/// must be non-empty and must not start with whitespace. It is returned
/// verbatim, trailing whitespace included, for the decoder to judge.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AppError::unauthorized("Invalid authorization scheme"))?;

    if token.is_empty() || token.starts_with(char::is_whitespace) {
        return Err(AppError::unauthorized("Invalid authorization header"));
    }

    Ok(token)
}
