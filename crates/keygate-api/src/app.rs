//! Application builder: wires router, middleware and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use keygate_core::config::AppConfig;
use keygate_core::error::AppError;
use keygate_database::{DatabasePool, MemoryUserStore, UserRepository, UserStore};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Opens the user store named by `database.url`.
///
/// A `memory:` URL selects the in-process store. Anything else is treated
/// as a PostgreSQL URL and connected; pending migrations are applied when
/// `database.auto_migrate` is set.
pub async fn open_store(config: &AppConfig) -> Result<(Arc<dyn UserStore>, Option<DatabasePool>), AppError> {
    if config.database.is_memory() {
        tracing::warn!("Using in-memory user store; users are lost on shutdown");
        return Ok((Arc::new(MemoryUserStore::new()), None));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    if config.database.auto_migrate {
        pool.migrate().await?;
    }
    let store = Arc::new(UserRepository::new(pool.pool().clone()));
    Ok((store, Some(pool)))
}

/// Runs the Keygate server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Keygate server...");

    if config.auth.uses_insecure_default() {
        tracing::warn!(
            "No JWT secret configured; signing tokens with the built-in development key. \
             Set JWT_SECRET before exposing this service."
        );
    }

    let (store, pool) = open_store(&config).await?;

    let addr = config.server.bind_address();
    let app = build_app(AppState::new(config, store)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Keygate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = pool {
        pool.close().await;
    }

    tracing::info!("Keygate server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
