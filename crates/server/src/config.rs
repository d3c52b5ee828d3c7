use moviematch::{DatabaseConfig, MatchConfig};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API keys accepted on `/search`. Empty disables the check.
    ///
    /// Takes a list or a comma separated string.
    #[serde(default, deserialize_with = "deserialize_api_keys")]
    pub api_keys: HashSet<String>,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Defaults applied when `/search` omits `limit` or `threshold`
    #[serde(default)]
    pub search: SearchConfig,

    /// Title store
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Query parameter defaults for `/search`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "MatchConfig::default_limit")]
    pub default_limit: usize,

    #[serde(default = "MatchConfig::default_threshold")]
    pub default_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: MatchConfig::default_limit(),
            default_threshold: MatchConfig::default_threshold(),
        }
    }
}

impl SearchConfig {
    /// Fill in whatever the request left out.
    pub fn resolve(&self, limit: Option<usize>, threshold: Option<f64>) -> MatchConfig {
        MatchConfig {
            limit: limit.unwrap_or(self.default_limit),
            threshold: threshold.unwrap_or(self.default_threshold),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            api_keys: HashSet::new(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            search: SearchConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `moviematch.*` file and
    /// `MOVIEMATCH__*` environment variables, in increasing precedence.
    pub fn load() -> anyhow::Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        Self::from_environment(Self::environment())
    }

    /// `MOVIEMATCH__*` variables, e.g. `MOVIEMATCH__DATABASE__HOST`.
    ///
    /// Values stay strings; serde converts the numeric and boolean fields.
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("MOVIEMATCH").separator("__")
    }

    /// Build from the optional `moviematch.*` file overridden by `env`.
    pub fn from_environment(env: config::Environment) -> anyhow::Result<Self> {
        let config: ServerConfig = config::Config::builder()
            .add_source(config::File::with_name("moviematch").required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        self.search
            .resolve(None, None)
            .validate()
            .map_err(|err| anyhow::anyhow!("search defaults: {err}"))?;
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn auth_enabled(&self) -> bool {
        !self.api_keys.is_empty()
    }
}

fn deserialize_api_keys<'de, D>(deserializer: D) -> Result<HashSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Keys {
        Joined(String),
        List(Vec<String>),
    }

    let keys = match Keys::deserialize(deserializer)? {
        Keys::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        Keys::List(list) => list,
    };

    Ok(keys
        .into_iter()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect())
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8001);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.enable_cors);
        assert!(!cfg.auth_enabled());
        assert_eq!(cfg.search.default_limit, 5);
        assert_eq!(cfg.search.default_threshold, 70.0);
        assert_eq!(cfg.database.table, "movie");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8001);
    }

    #[test]
    fn test_resolve_uses_defaults_for_missing_params() {
        let search = SearchConfig::default();
        assert_eq!(search.resolve(None, None), MatchConfig::default());

        let cfg = search.resolve(Some(2), Some(0.0));
        assert_eq!(cfg.limit, 2);
        assert_eq!(cfg.threshold, 0.0);
    }

    #[test]
    fn test_invalid_search_defaults_rejected() {
        let cfg = ServerConfig {
            search: SearchConfig {
                default_limit: 0,
                default_threshold: 70.0,
            },
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_deserialize_nested_sections() {
        let cfg: ServerConfig = serde_json::from_value(serde_json::json!({
            "port": 9000,
            "api_keys": ["k1"],
            "database": { "host": "db", "port": 3306 },
            "search": { "default_limit": 10 }
        }))
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert!(cfg.auth_enabled());
        assert_eq!(cfg.database.host, "db");
        assert_eq!(cfg.database.database, "zo_stream_api");
        assert_eq!(cfg.search.default_limit, 10);
        assert_eq!(cfg.search.default_threshold, 70.0);
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::environment().source(Some(map))
    }

    #[test]
    fn test_env_strings_are_not_reparsed() {
        let cfg = ServerConfig::from_environment(env(&[
            ("MOVIEMATCH__DATABASE__PASSWORD", "007"),
            ("MOVIEMATCH__DATABASE__USER", "1.50"),
        ]))
        .unwrap();
        assert_eq!(cfg.database.password, "007");
        assert_eq!(cfg.database.user, "1.50");
    }

    #[test]
    fn test_env_numeric_and_bool_fields() {
        let cfg = ServerConfig::from_environment(env(&[
            ("MOVIEMATCH__PORT", "9001"),
            ("MOVIEMATCH__ENABLE_CORS", "false"),
            ("MOVIEMATCH__SEARCH__DEFAULT_THRESHOLD", "55"),
            ("MOVIEMATCH__DATABASE__PORT", "3306"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 9001);
        assert!(!cfg.enable_cors);
        assert_eq!(cfg.search.default_threshold, 55.0);
        assert_eq!(cfg.database.port, 3306);
    }

    #[test]
    fn test_env_api_keys_comma_list() {
        let cfg = ServerConfig::from_environment(env(&[(
            "MOVIEMATCH__API_KEYS",
            "k1, 0042,,k2",
        )]))
        .unwrap();
        assert_eq!(cfg.api_keys.len(), 3);
        assert!(cfg.api_keys.contains("0042"));
        assert!(cfg.api_keys.contains("k2"));
    }
}
