//! # keygate-auth
//!
//! The token lifecycle and access-decision core of Keygate.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and verification of user secrets
//! - `jwt`: signed session token issuance and verification
//! - `gate`: bearer extraction and identity re-resolution for protected requests
//! - `rbac`: role checks on an authenticated identity
//! - `session`: signup, login and refresh orchestration

pub mod gate;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use gate::Authenticator;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
pub use rbac::require_role;
pub use session::{IssuedSession, SessionIssuer};
