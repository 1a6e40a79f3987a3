//! Server startup and shutdown.
//!
//! `run_server` builds the router from the CORS rule, binds the listener and
//! serves until Ctrl+C or SIGTERM.

use crate::config::Config;
use crate::cors;
use crate::error::{AppError, AppResult};
use crate::routes;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// # Errors
///
/// Returns an error if binding the address fails or the server stops with a
/// runtime error.
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting server...");
    info!("CORS rule: {}", cors::describe(&config.cors));

    let app = routes::create_router(&config.cors);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!("  - GET {}/hello - Health check", config.cors.path_prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails, since graceful shutdown is
/// impossible without it.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received");
}
