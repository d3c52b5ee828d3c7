//! Title catalog: loads the movie title corpus once at startup.
//!
//! A [`TitleSource`] produces the raw list of titles; [`load_or_empty`] turns
//! that into a [`TitleCorpus`](matcher::TitleCorpus) and never fails. When
//! the source errors the outcome is [`LoadOutcome::FailedOpen`], which carries
//! the error for logging and readiness reporting and yields an empty corpus.
//! Callers that want the error to propagate use [`try_load`] instead.
//!
//! ```
//! use catalog::{load_or_empty, StaticTitleSource};
//!
//! # tokio_test_block_on(async {
//! let source = StaticTitleSource::new(["The Matrix", "Inception"]);
//! let corpus = load_or_empty(&source).await.into_corpus();
//! assert_eq!(corpus.len(), 2);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod config;
mod error;
mod loader;
#[cfg(feature = "mysql")]
mod mysql;
mod source;

pub use crate::config::DatabaseConfig;
pub use crate::error::CatalogError;
pub use crate::loader::{load_or_empty, try_load, LoadOutcome};
#[cfg(feature = "mysql")]
pub use crate::mysql::MySqlTitleSource;
pub use crate::source::{StaticTitleSource, TitleSource};
