use thiserror::Error;

/// Errors raised while loading titles from a source.
///
/// None of these stop the process: [`load_or_empty`](crate::load_or_empty)
/// logs them and substitutes an empty corpus.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid database configuration: {0}")]
    InvalidConfig(String),

    #[error("could not connect to {target}: {reason}")]
    Connect { target: String, reason: String },

    #[error("connecting to {target} timed out after {secs}s")]
    Timeout { target: String, secs: u64 },

    #[error("title query failed: {0}")]
    Query(String),
}
