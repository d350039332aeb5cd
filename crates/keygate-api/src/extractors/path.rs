//! Typed path parameter helpers.

use keygate_core::error::AppError;

/// Parses a user identifier from a path segment.
pub fn parse_user_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Invalid user id: {s}")))
}
