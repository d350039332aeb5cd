//! Token verification failure causes.

use thiserror::Error;

use keygate_core::error::AppError;

/// Why a token was rejected or could not be produced.
///
/// The verification causes are kept apart for diagnostics and tests; at the
/// HTTP boundary all of them become the same `Unauthorized` response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a three-segment token with decodable header and claims.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match header and claims under the service key.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The expiry instant has passed.
    #[error("token has expired")]
    Expired,
    /// Signing a new token failed.
    #[error("failed to sign token: {0}")]
    Encoding(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(reason) => {
                AppError::internal(format!("Failed to generate token: {reason}"))
            }
            _ => AppError::unauthorized("Invalid token"),
        }
    }
}
