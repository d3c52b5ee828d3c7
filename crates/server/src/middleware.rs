use crate::error::ServerError;
use crate::state::ServerState;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use std::time::Instant;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions by [`request_id`].
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Key presented by the caller, from `X-API-Key` or `Authorization: Bearer`.
///
/// `X-API-Key` wins when both are sent. Blank values count as absent.
pub fn presented_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(non_blank)
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .and_then(non_blank)
        })
}

fn non_blank(key: &str) -> Option<&str> {
    Some(key.trim()).filter(|key| !key.is_empty())
}

/// Guards `/search` with the configured API keys.
///
/// Passes everything through when no keys are configured.
pub async fn api_key_auth(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    if !state.config.auth_enabled() {
        return Ok(next.run(request).await);
    }

    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or_default();

    match presented_key(request.headers()) {
        Some(key) if state.is_valid_api_key(key) => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!(request_id, "rejected search with unknown API key");
            Err(ServerError::Authentication("Invalid API key".to_string()))
        }
        None => {
            tracing::warn!(request_id, "rejected search without API key");
            Err(ServerError::Authentication(
                "API key required. Provide it in 'X-API-Key' or 'Authorization: Bearer <key>' header"
                    .to_string(),
            ))
        }
    }
}

/// Tags each request with an id, reusing the caller's `x-request-id` if sent,
/// and echoes it on the response.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    request.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Logs start and completion of every request with its id and latency.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    tracing::debug!(%method, %path, %request_id, "request started");

    let response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(%method, %path, %status, duration_ms, %request_id, "request failed");
    } else {
        tracing::info!(%method, %path, %status, duration_ms, %request_id, "request completed");
    }

    response
}
