use moviematch::{MatchConfig, MatchError, TitleCorpus, TitleMatcher, match_titles};

#[test]
fn empty_corpus_is_unavailable_for_any_request() {
    let matcher = TitleMatcher::new(TitleCorpus::empty());
    for (query, limit, threshold) in [
        ("anything", 5, 70.0),
        ("", 1, 0.0),
        ("The Matrix", 100, 100.0),
        ("bad config", 0, -1.0),
    ] {
        let cfg = MatchConfig { limit, threshold };
        assert_eq!(
            matcher.match_title(query, &cfg),
            Err(MatchError::CorpusUnavailable)
        );
    }
}

#[test]
fn corpus_unavailable_message_mentions_cause() {
    let msg = MatchError::CorpusUnavailable.to_string();
    assert!(msg.contains("empty"));
    assert!(msg.contains("DB"));
}

#[test]
fn invalid_limit_and_threshold_are_config_errors() {
    let titles = vec!["Alpha".to_string()];
    assert!(matches!(
        match_titles("Alpha", &titles, 0, 70.0),
        Err(MatchError::InvalidConfig(_))
    ));
    assert!(matches!(
        match_titles("Alpha", &titles, 1, 100.1),
        Err(MatchError::InvalidConfig(_))
    ));
    assert!(matches!(
        match_titles("Alpha", &titles, 1, f64::NAN),
        Err(MatchError::InvalidConfig(_))
    ));
}

#[test]
fn no_match_is_empty_not_error() {
    let titles = vec!["Alpha".to_string(), "Beta".to_string()];
    let results = match_titles("zzzz", &titles, 5, 70.0).expect("match");
    assert!(results.is_empty());
}
