use std::time::Instant;

use matcher::TitleCorpus;
use tracing::{error, info};

use crate::error::CatalogError;
use crate::source::TitleSource;

/// Result of the startup load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Titles were fetched; the corpus may still be empty if the table was.
    Loaded(TitleCorpus),
    /// The source failed and an empty corpus stands in for it.
    FailedOpen(CatalogError),
}

impl LoadOutcome {
    pub fn is_failed_open(&self) -> bool {
        matches!(self, LoadOutcome::FailedOpen(_))
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::FailedOpen(err) => Some(err),
        }
    }

    /// The loaded corpus, or an empty one when the load failed.
    pub fn into_corpus(self) -> TitleCorpus {
        match self {
            LoadOutcome::Loaded(corpus) => corpus,
            LoadOutcome::FailedOpen(_) => TitleCorpus::empty(),
        }
    }

    /// Split into the corpus and the error (if any) that replaced it.
    pub fn into_parts(self) -> (TitleCorpus, Option<CatalogError>) {
        match self {
            LoadOutcome::Loaded(corpus) => (corpus, None),
            LoadOutcome::FailedOpen(err) => (TitleCorpus::empty(), Some(err)),
        }
    }
}

/// Fetch all titles, propagating any source error.
pub async fn try_load<S>(source: &S) -> Result<TitleCorpus, CatalogError>
where
    S: TitleSource + ?Sized,
{
    let titles = source.fetch_titles().await?;
    Ok(TitleCorpus::new(titles))
}

/// Fetch all titles; on failure log the error and fall back to an empty
/// corpus. Never retries.
pub async fn load_or_empty<S>(source: &S) -> LoadOutcome
where
    S: TitleSource + ?Sized,
{
    let start = Instant::now();
    let target = source.describe();

    match try_load(source).await {
        Ok(corpus) => {
            info!(
                source = %target,
                titles = corpus.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Fetched {} movie titles from DB.",
                corpus.len()
            );
            LoadOutcome::Loaded(corpus)
        }
        Err(err) => {
            error!(source = %target, error = %err, "DB error: {err}");
            LoadOutcome::FailedOpen(err)
        }
    }
}
