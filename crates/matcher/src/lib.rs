//! # Title Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` scores a free-text query against every title in a
//! [`TitleCorpus`] and returns the best candidates. The corpus is loaded once
//! (see the `catalog` crate) and never mutated afterwards, so a single
//! [`TitleMatcher`] can be shared across request handlers without locking.
//!
//! ## Core Types
//!
//! - [`TitleCorpus`]: ordered, immutable, cheaply clonable list of titles.
//! - [`MatchConfig`]: per-request `limit` and `threshold`.
//! - [`MatchResult`]: a title and its similarity score in `[0, 100]`.
//! - [`TitleMatcher`]: owns a corpus and runs match requests against it.
//! - [`ratio`]: the Indel similarity scorer used for every comparison.
//!
//! ## Selection rules
//!
//! 1. Every title is scored against the query.
//! 2. Candidates are sorted by descending score. Equal scores keep corpus
//!    order.
//! 3. The list is truncated to `limit`.
//! 4. Entries scoring below `threshold` are dropped.
//!
//! Step 4 runs after step 3: a title that clears the threshold but ranks
//! below position `limit` is never returned.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{MatchConfig, TitleCorpus, TitleMatcher};
//!
//! let corpus = TitleCorpus::new(vec!["Alpha".to_string(), "Beta".to_string()]);
//! let matcher = TitleMatcher::new(corpus);
//!
//! let config = MatchConfig { limit: 1, threshold: 70.0 };
//! let results = matcher.match_title("Alpha", &config).expect("match");
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title, "Alpha");
//! assert_eq!(results[0].score, 100.0);
//! ```

pub mod engine;
pub mod ratio;
pub mod types;

pub use crate::engine::{match_titles, TitleMatcher};
pub use crate::ratio::ratio;
pub use crate::types::{MatchConfig, MatchError, MatchResult, TitleCorpus};
