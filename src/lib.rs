//! Workspace umbrella crate for moviematch.
//!
//! This crate stitches the title loader (`catalog`) and the fuzzy matcher
//! (`matcher`) together so callers can go from a title source to a ready
//! [`TitleMatcher`] with a single call.

pub use catalog::{
    CatalogError, DatabaseConfig, LoadOutcome, StaticTitleSource, TitleSource, load_or_empty,
    try_load,
};
#[cfg(feature = "mysql")]
pub use catalog::MySqlTitleSource;
pub use matcher::{
    MatchConfig, MatchError, MatchResult, TitleCorpus, TitleMatcher, match_titles, ratio,
};

/// A matcher built at startup, plus the load error that emptied its corpus
/// if there was one.
#[derive(Debug)]
pub struct Bootstrap {
    pub matcher: TitleMatcher,
    pub load_error: Option<CatalogError>,
}

impl Bootstrap {
    /// `true` when the corpus has at least one title.
    pub fn is_ready(&self) -> bool {
        self.matcher.is_ready()
    }
}

/// Load the corpus once from `source` and wrap it in a matcher.
///
/// Never fails: a source error is logged and leaves the matcher with an
/// empty corpus, so every request answers with
/// [`MatchError::CorpusUnavailable`] instead of the process exiting.
pub async fn bootstrap<S>(source: &S) -> Bootstrap
where
    S: TitleSource + ?Sized,
{
    let (corpus, load_error) = load_or_empty(source).await.into_parts();
    if corpus.is_empty() && load_error.is_none() {
        tracing::warn!(source = %source.describe(), "title source returned no rows");
    }

    Bootstrap {
        matcher: TitleMatcher::new(corpus),
        load_error,
    }
}

/// [`bootstrap`] against the MySQL store described by `config`.
///
/// An invalid `config` is treated like any other load failure.
#[cfg(feature = "mysql")]
pub async fn bootstrap_from_config(config: &DatabaseConfig) -> Bootstrap {
    match MySqlTitleSource::new(config.clone()) {
        Ok(source) => bootstrap(&source).await,
        Err(err) => {
            tracing::error!(error = %err, "DB error: {err}");
            Bootstrap {
                matcher: TitleMatcher::new(TitleCorpus::empty()),
                load_error: Some(err),
            }
        }
    }
}
