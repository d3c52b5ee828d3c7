use crate::config::ServerConfig;
use moviematch::{Bootstrap, TitleCorpus, TitleMatcher};
use std::sync::Arc;

/// Shared application state
///
/// Built once before the listener binds. Nothing in here is mutated while
/// requests are served.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matcher over the title list loaded at startup
    pub matcher: Arc<TitleMatcher>,

    /// Why the title list is empty, if the startup load failed
    pub load_error: Option<Arc<str>>,
}

impl ServerState {
    /// Create state around an already loaded corpus.
    pub fn new(config: ServerConfig, corpus: TitleCorpus) -> Self {
        Self {
            config: Arc::new(config),
            matcher: Arc::new(TitleMatcher::new(corpus)),
            load_error: None,
        }
    }

    /// Create state from a startup load.
    pub fn from_bootstrap(config: ServerConfig, bootstrap: Bootstrap) -> Self {
        Self {
            config: Arc::new(config),
            matcher: Arc::new(bootstrap.matcher),
            load_error: bootstrap.load_error.map(|err| Arc::from(err.to_string())),
        }
    }

    /// Load titles from the configured database and build state. A failed
    /// load leaves the corpus empty; it does not fail startup.
    pub async fn load(config: ServerConfig) -> Self {
        let bootstrap = moviematch::bootstrap_from_config(&config.database).await;
        Self::from_bootstrap(config, bootstrap)
    }

    /// Number of titles available for matching
    pub fn title_count(&self) -> usize {
        self.matcher.corpus().len()
    }

    pub fn is_ready(&self) -> bool {
        self.matcher.is_ready()
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub titles_loaded: usize,
}
