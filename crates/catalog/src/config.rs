use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CatalogError;

/// Connection settings for the title store.
///
/// Defaults point at the local development database. `table` and `column`
/// are interpolated into the select statement, so [`validate`](Self::validate)
/// only accepts plain identifiers for them.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_database")]
    pub database: String,

    /// Table holding one row per movie.
    #[serde(default = "default_table")]
    pub table: String,

    /// Column holding the title string.
    #[serde(default = "default_column")]
    pub column: String,

    /// Upper bound on establishing the connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
            table: default_table(),
            column: default_column(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("table", &self.table)
            .field("column", &self.column)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.host.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "database.host must not be empty".into(),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "database.database must not be empty".into(),
            ));
        }
        if !is_identifier(&self.table) {
            return Err(CatalogError::InvalidConfig(format!(
                "database.table must be a plain identifier, got {:?}",
                self.table
            )));
        }
        if !is_identifier(&self.column) {
            return Err(CatalogError::InvalidConfig(format!(
                "database.column must be a plain identifier, got {:?}",
                self.column
            )));
        }
        if self.connect_timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "database.connect_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// The single read query issued at startup.
    pub fn select_titles_sql(&self) -> String {
        format!("SELECT `{}` FROM `{}`", self.column, self.table)
    }

    /// Connection target without credentials, for logs.
    pub fn display_target(&self) -> String {
        format!(
            "mysql://{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3307
}

fn default_user() -> String {
    "root".to_string()
}

fn default_database() -> String {
    "zo_stream_api".to_string()
}

fn default_table() -> String {
    "movie".to_string()
}

fn default_column() -> String {
    "title".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}
