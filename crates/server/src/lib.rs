//! moviematch server - HTTP search endpoint for fuzzy movie title matching
//!
//! The server loads every movie title once at startup and answers
//! `GET /search` by ranking those titles against the requested one. The
//! title list is never reloaded; restart the process to pick up database
//! changes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (fails while the title list is empty)
//! - `GET /metadata` - Version, uptime and title count
//! - `GET /search?title=..&limit=5&threshold=70` - Fuzzy title search
//!
//! `/search` requires an API key only when `api_keys` is configured.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{SearchConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
