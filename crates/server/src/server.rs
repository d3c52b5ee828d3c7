//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration
//! - Middleware stack (request id, logging, timeout, CORS, optional auth)
//! - Startup title load and graceful shutdown

use crate::config::ServerConfig;
use crate::middleware::{api_key_auth, log_requests, request_id};
use crate::routes::{api_info, not_found};
use crate::routes::{health, search};
use crate::state::ServerState;
use axum::http::StatusCode;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Routes are divided into:
/// - Public routes: /, /health, /ready, /metadata
/// - Search: /search (API key checked when keys are configured)
///
/// Middleware, outermost first:
/// 1. Request ID tracking
/// 2. Request logging
/// 3. HTTP tracing
/// 4. CORS
/// 5. Timeout handling
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metadata", get(health::server_metadata));

    let search_routes = Router::new()
        .route("/search", get(search::search_titles))
        .layer(from_fn_with_state(state.clone(), api_key_auth));

    Router::new()
        .merge(public_routes)
        .merge(search_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .with_state(state)
}

/// Start the moviematch HTTP server
///
/// Initializes logging, loads the title list once, then serves requests
/// until SIGTERM or Ctrl+C.
///
/// # Initialization
///
/// 1. Sets up structured JSON logging with the configured log level
/// 2. Loads movie titles from the database (an empty list on failure)
/// 3. Builds the Axum router with all routes and middleware
/// 4. Binds to the configured TCP address
/// 5. Starts the HTTP server with graceful shutdown support
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    if !config.auth_enabled() {
        tracing::warn!("No API keys configured, /search is open");
    }

    let addr: SocketAddr = config.socket_addr()?;

    let state = Arc::new(ServerState::load(config.clone()).await);
    if !state.is_ready() {
        tracing::warn!(
            load_error = state.load_error.as_deref().unwrap_or("no rows"),
            "Starting with an empty title list; /search will fail until restart"
        );
    }

    let app = build_router(state.clone());

    tracing::info!(
        "Starting moviematch server on {} with {} titles",
        addr,
        state.title_count()
    );
    tracing::info!(
        "Timeout: {}s, CORS: {}, API key auth: {}",
        config.timeout_secs,
        config.enable_cors,
        config.auth_enabled()
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
