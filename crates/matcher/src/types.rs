use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::ops::Deref;
use std::sync::Arc;

/// Ordered, immutable list of titles.
///
/// Order is the order the titles were loaded in and is used to break score
/// ties deterministically. Duplicates are kept as separate entries. Cloning
/// only bumps a reference count, so a corpus can be handed to every request
/// handler without copying the titles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleCorpus {
    titles: Arc<[String]>,
}

impl TitleCorpus {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles: titles.into(),
        }
    }

    /// A corpus with no titles. Matching against it always fails with
    /// [`MatchError::CorpusUnavailable`].
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

impl Deref for TitleCorpus {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.titles
    }
}

impl From<Vec<String>> for TitleCorpus {
    fn from(titles: Vec<String>) -> Self {
        Self::new(titles)
    }
}

impl FromIterator<String> for TitleCorpus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Per-request selection knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Maximum number of results; candidates are truncated to this many
    /// before the threshold is applied.
    #[serde(default = "MatchConfig::default_limit")]
    pub limit: usize,
    /// Minimum score (inclusive) in `[0, 100]`.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: f64,
}

impl MatchConfig {
    pub const MAX_SCORE: f64 = 100.0;

    pub fn default_limit() -> usize {
        5
    }

    pub fn default_threshold() -> f64 {
        70.0
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.limit == 0 {
            return Err(MatchError::InvalidConfig(
                "limit must be greater than zero".into(),
            ));
        }
        if !self.threshold.is_finite() || !(0.0..=Self::MAX_SCORE).contains(&self.threshold) {
            return Err(MatchError::InvalidConfig(format!(
                "threshold must be between 0 and {}, got {}",
                Self::MAX_SCORE,
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            threshold: Self::default_threshold(),
        }
    }
}

/// A single ranked title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub title: String,
    /// Similarity in `[0, 100]`; 100 means the strings are identical.
    pub score: f64,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// The corpus is empty, either because the startup load failed or the
    /// source table had no rows.
    #[error("movie titles list is empty or DB connection failed")]
    CorpusUnavailable,
    /// Invalid per-request configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Unexpected failure while scoring or ranking.
    #[error("matching fault: {0}")]
    Fault(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_endpoint_defaults() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.limit, 5);
        assert_eq!(cfg.threshold, 70.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_limit_rejected() {
        let cfg = MatchConfig {
            limit: 0,
            ..MatchConfig::default()
        };
        match cfg.validate().expect_err("config should be invalid") {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("limit")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        for threshold in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            let cfg = MatchConfig {
                threshold,
                ..MatchConfig::default()
            };
            match cfg.validate().expect_err("config should be invalid") {
                MatchError::InvalidConfig(msg) => assert!(msg.contains("threshold")),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn boundary_thresholds_accepted() {
        for threshold in [0.0, 100.0] {
            let cfg = MatchConfig {
                limit: 1,
                threshold,
            };
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: MatchConfig = serde_json::from_str(r#"{"limit": 3}"#).expect("parse");
        assert_eq!(cfg.limit, 3);
        assert_eq!(cfg.threshold, 70.0);
    }

    #[test]
    fn corpus_clone_shares_titles() {
        let corpus = TitleCorpus::new(vec!["A".into(), "A".into(), "B".into()]);
        let clone = corpus.clone();
        assert_eq!(clone.len(), 3);
        assert!(std::ptr::eq(corpus.titles(), clone.titles()));
        assert!(TitleCorpus::empty().is_empty());
    }
}
