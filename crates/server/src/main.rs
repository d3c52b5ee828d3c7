//! moviematch server - fuzzy movie title search over HTTP
//!
//! Loads titles from the configured database once, then serves `/search`
//! until SIGTERM or Ctrl+C.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
