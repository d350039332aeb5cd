//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use keygate_auth::jwt::{JwtDecoder, JwtEncoder};
use keygate_auth::password::PasswordHasher;
use keygate_auth::{Authenticator, SessionIssuer};
use keygate_core::config::AppConfig;
use keygate_core::error::AppError;
use keygate_database::UserStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything is
/// immutable after startup apart from what the user store guards itself.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User store (PostgreSQL or in-memory)
    pub store: Arc<dyn UserStore>,
    /// Signup, login and refresh flows
    pub issuer: Arc<SessionIssuer>,
    /// Bearer token to live user resolution
    pub authenticator: Arc<Authenticator>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("issuer", &self.issuer)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the auth components from configuration with default hashing cost.
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Result<Self, AppError> {
        let encoder = JwtEncoder::new(&config.auth)?;
        Ok(Self::with_components(
            config,
            store,
            PasswordHasher::new(),
            encoder,
        ))
    }

    /// Wires the auth components around an explicit hasher and encoder.
    pub fn with_components(
        config: AppConfig,
        store: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        encoder: JwtEncoder,
    ) -> Self {
        let decoder = JwtDecoder::new(&config.auth);
        let authenticator = Authenticator::new(decoder, Arc::clone(&store));
        let issuer = SessionIssuer::new(
            Arc::clone(&store),
            Arc::new(hasher),
            Arc::new(encoder),
            authenticator.clone(),
        );

        Self {
            config: Arc::new(config),
            store,
            issuer: Arc::new(issuer),
            authenticator: Arc::new(authenticator),
        }
    }
}
