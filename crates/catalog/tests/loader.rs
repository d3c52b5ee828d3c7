use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog::{load_or_empty, try_load, CatalogError, LoadOutcome, StaticTitleSource, TitleSource};

/// Source that always fails and counts how often it was asked.
#[derive(Default)]
struct RefusingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl TitleSource for RefusingSource {
    async fn fetch_titles(&self) -> Result<Vec<String>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::Connect {
            target: "mysql://root@127.0.0.1:3307/zo_stream_api".into(),
            reason: "connection refused".into(),
        })
    }

    fn describe(&self) -> String {
        "refusing test source".into()
    }
}

#[tokio::test]
async fn loads_titles_in_source_order() {
    let source = StaticTitleSource::new(["The Matrix", "Inception", "The Matrix"]);
    let outcome = load_or_empty(&source).await;

    assert!(!outcome.is_failed_open());
    assert!(outcome.error().is_none());
    let corpus = outcome.into_corpus();
    assert_eq!(
        corpus.titles(),
        &["The Matrix", "Inception", "The Matrix"].map(String::from)
    );
}

#[tokio::test]
async fn empty_table_is_loaded_not_failed() {
    let source = StaticTitleSource::new(Vec::<String>::new());
    let outcome = load_or_empty(&source).await;

    assert!(matches!(outcome, LoadOutcome::Loaded(ref c) if c.is_empty()));
}

#[tokio::test]
async fn failure_opens_to_empty_corpus_without_retry() {
    let source = RefusingSource::default();
    let outcome = load_or_empty(&source).await;

    assert!(outcome.is_failed_open());
    let (corpus, err) = outcome.into_parts();
    assert!(corpus.is_empty());
    let err = err.expect("error is kept");
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn try_load_propagates_errors() {
    let source = RefusingSource::default();
    let err = try_load(&source).await.expect_err("must fail");
    assert!(matches!(err, CatalogError::Connect { .. }));
}

#[tokio::test]
async fn boxed_sources_load_through_trait_objects() {
    let source: Box<dyn TitleSource> = Box::new(StaticTitleSource::new(["Heat"]));
    let corpus = try_load(&source).await.expect("load");
    assert_eq!(corpus.len(), 1);
    assert_eq!(source.describe(), "static list (1 titles)");
}
