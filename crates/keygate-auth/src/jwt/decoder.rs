//! Session token verification.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};

use keygate_core::config::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;

/// Validates session tokens against the service signing key.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and verifies a token.
    ///
    /// Checks, in order:
    /// 1. Three non-empty segments with a decodable header and claims body
    /// 2. Signature over header and claims under the service key
    /// 3. Expiry strictly in the future
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        check_structure(token)?;

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| classify(e.kind()))?;

        if data.claims.is_expired_at(Utc::now()) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

/// Rejects anything that is not shaped like a signed claims token before
/// signature verification runs.
fn check_structure(token: &str) -> Result<(), TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(TokenError::Malformed);
    }

    decode_header(token).map_err(|_| TokenError::Malformed)?;

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice::<Claims>(&payload).map_err(|_| TokenError::Malformed)?;

    Ok(())
}

fn classify(kind: &JwtErrorKind) -> TokenError {
    match kind {
        JwtErrorKind::ExpiredSignature => TokenError::Expired,
        JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm | JwtErrorKind::Base64(_) => {
            TokenError::InvalidSignature
        }
        _ => TokenError::Malformed,
    }
}
