//! API route handlers
//!
//! - `health`: liveness, readiness and metadata
//! - `search`: fuzzy title search

pub mod health;
pub mod search;

use crate::error::ServerError;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Service description, including the defaults `/search` falls back to.
///
/// ```json
/// {
///   "name": "moviematch",
///   "version": "0.1.0",
///   "endpoints": ["/search", "/health", "/ready", "/metadata"],
///   "search": { "default_limit": 5, "default_threshold": 70.0, "auth_required": false }
/// }
/// ```
pub async fn api_info(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let search = &state.config.search;
    Json(json!({
        "name": "moviematch",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/search", "/health", "/ready", "/metadata"],
        "search": {
            "default_limit": search.default_limit,
            "default_threshold": search.default_threshold,
            "auth_required": state.config.auth_enabled(),
        }
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
