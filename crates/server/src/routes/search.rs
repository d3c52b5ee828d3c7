use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use moviematch::MatchResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query string of `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Movie title to fuzzy match
    pub title: String,

    /// Max number of results
    #[serde(default)]
    pub limit: Option<usize>,

    /// Minimum match score, a whole number from 0 to 100
    #[serde(default)]
    pub threshold: Option<i64>,
}

/// Search response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<MatchResult>,
}

/// Fuzzy-match `title` against the titles loaded at startup.
///
/// Scoring is CPU-bound over the whole title list, so it runs on the
/// blocking pool. A panic there is reported as a matching error rather than
/// dropping the connection.
pub async fn search_titles(
    State(state): State<Arc<ServerState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ServerResult<Json<SearchResponse>> {
    let Query(params) = params.map_err(|rejection| {
        ServerError::InvalidQuery(rejection.body_text())
    })?;

    let threshold = params.threshold.map(|t| t as f64);
    let config = state.config.search.resolve(params.limit, threshold);
    let matcher = state.matcher.clone();
    let title = params.title;

    let results = tokio::task::spawn_blocking(move || matcher.match_title(&title, &config))
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Matching error: {err}");
            ServerError::MatchingFault
        })??;

    Ok(Json(SearchResponse { results }))
}
