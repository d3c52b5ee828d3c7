use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::error::CatalogError;
use crate::source::TitleSource;

/// Reads titles from a MySQL table over a single short-lived connection.
///
/// The connection is opened inside [`fetch_titles`](TitleSource::fetch_titles)
/// and closed before it returns, whether or not the query succeeded.
#[derive(Debug, Clone)]
pub struct MySqlTitleSource {
    config: DatabaseConfig,
}

impl MySqlTitleSource {
    pub fn new(config: DatabaseConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self { config })
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database)
    }

    async fn connect(&self) -> Result<MySqlConnection, CatalogError> {
        let target = self.config.display_target();
        let options = self.connect_options();

        match tokio::time::timeout(self.config.connect_timeout(), options.connect()).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(err)) => Err(CatalogError::Connect {
                target,
                reason: err.to_string(),
            }),
            Err(_) => Err(CatalogError::Timeout {
                target,
                secs: self.config.connect_timeout_secs,
            }),
        }
    }
}

#[async_trait]
impl TitleSource for MySqlTitleSource {
    async fn fetch_titles(&self) -> Result<Vec<String>, CatalogError> {
        let mut conn = self.connect().await?;

        let sql = self.config.select_titles_sql();
        let rows = sqlx::query_scalar::<_, Option<String>>(&sql)
            .fetch_all(&mut conn)
            .await;

        if let Err(err) = conn.close().await {
            warn!(error = %err, "failed to close title store connection cleanly");
        }

        let rows = rows.map_err(|err| CatalogError::Query(err.to_string()))?;
        Ok(collect_titles(rows))
    }

    fn describe(&self) -> String {
        self.config.display_target()
    }
}

/// Keep non-null titles in row order.
fn collect_titles(rows: Vec<Option<String>>) -> Vec<String> {
    let total = rows.len();
    let titles: Vec<String> = rows.into_iter().flatten().collect();
    if titles.len() < total {
        debug!(skipped = total - titles.len(), "skipped NULL titles");
    }
    titles
}
