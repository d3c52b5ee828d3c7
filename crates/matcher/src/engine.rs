use std::time::Instant;

use crate::ratio::QueryScorer;
use crate::types::{MatchConfig, MatchError, MatchResult, TitleCorpus};


/// Matcher over a corpus captured at construction time.
///
/// The corpus never changes after construction, so `TitleMatcher` is `Sync`
/// and can sit behind an `Arc` shared by every request handler.
#[derive(Debug, Clone, Default)]
pub struct TitleMatcher {
    corpus: TitleCorpus,
}

impl TitleMatcher {
    pub fn new(corpus: TitleCorpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &TitleCorpus {
        &self.corpus
    }

    /// `false` when every request would fail with
    /// [`MatchError::CorpusUnavailable`].
    pub fn is_ready(&self) -> bool {
        !self.corpus.is_empty()
    }

    /// Run a single match request and return ordered results.
    pub fn match_title(
        &self,
        query: &str,
        config: &MatchConfig,
    ) -> Result<Vec<MatchResult>, MatchError> {
        match_titles(query, &self.corpus, config.limit, config.threshold)
    }
}

/// Score `query` against every title in `corpus`, keep the best `limit`
/// (ties in corpus order) and drop those scoring below `threshold`.
///
/// The threshold is applied after truncation, so fewer than `limit` results
/// may come back even when lower-ranked titles would have qualified.
pub fn match_titles(
    query: &str,
    corpus: &[String],
    limit: usize,
    threshold: f64,
) -> Result<Vec<MatchResult>, MatchError> {
    if corpus.is_empty() {
        return Err(MatchError::CorpusUnavailable);
    }
    MatchConfig { limit, threshold }.validate()?;

    let start = Instant::now();
    let scorer = QueryScorer::new(query);

    let mut scored: Vec<(usize, f64)> = corpus
        .iter()
        .enumerate()
        .map(|(idx, title)| (idx, scorer.score(title)))
        .collect();

    if let Some(&(idx, score)) = scored.iter().find(|(_, score)| !score.is_finite()) {
        return Err(MatchError::Fault(format!(
            "non-finite score {score} for title at position {idx}"
        )));
    }

    // `sort_by` is stable: equal scores stay in corpus order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);

    let results: Vec<MatchResult> = scored
        .into_iter()
        .filter(|&(_, score)| score >= threshold)
        .map(|(idx, score)| MatchResult {
            title: corpus[idx].clone(),
            score,
        })
        .collect();

    tracing::debug!(
        corpus_size = corpus.len(),
        limit,
        threshold,
        returned = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "title match complete"
    );

    Ok(results)
}
