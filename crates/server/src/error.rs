use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use moviematch::MatchError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The title list is empty because the startup load failed or the table
    /// had no rows.
    #[error("Movie titles list is empty or DB connection failed")]
    CorpusUnavailable,

    /// Scoring failed unexpectedly. Details are logged, never returned.
    #[error("Internal matching error.")]
    MatchingFault,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ServerError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            // Kept at 500 rather than 503 for compatibility with existing
            // clients of the search endpoint.
            ServerError::CorpusUnavailable
            | ServerError::MatchingFault
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::Authentication(_) => "AUTH_FAILED",
            ServerError::InvalidQuery(_) => "INVALID_QUERY",
            ServerError::CorpusUnavailable => "CORPUS_UNAVAILABLE",
            ServerError::MatchingFault => "MATCHING_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }

    /// Message safe to hand to the caller.
    fn public_detail(&self) -> String {
        match self {
            ServerError::Internal(_) | ServerError::Config(_) => {
                "Internal server error.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            detail: self.public_detail(),
            code: self.error_code().to_string(),
        });

        (status, body).into_response()
    }
}

impl From<MatchError> for ServerError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::CorpusUnavailable => ServerError::CorpusUnavailable,
            MatchError::InvalidConfig(msg) => ServerError::InvalidQuery(msg),
            MatchError::Fault(detail) => {
                tracing::error!(detail = %detail, "Matching error: {detail}");
                ServerError::MatchingFault
            }
        }
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
