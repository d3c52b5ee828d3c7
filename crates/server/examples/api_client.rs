//! Examples for using the moviematch search API
//!
//! Start the server first (`cargo run -p moviematch-server`), then
//! `cargo run -p moviematch-server --example api_client`.

use reqwest::Client;
use serde_json::Value;

const SERVER_URL: &str = "http://localhost:8001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();
    let api_key = std::env::var("MOVIEMATCH_API_KEY").ok();

    // Example 1: Readiness
    println!("1. Readiness:");
    let resp = client.get(format!("{SERVER_URL}/ready")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Search with defaults (limit=5, threshold=70)
    println!("2. Search with defaults:");
    let mut request = client
        .get(format!("{SERVER_URL}/search"))
        .query(&[("title", "The Matrix")]);
    if let Some(key) = &api_key {
        request = request.header("X-API-Key", key);
    }
    let resp = request.send().await?;
    println!("Status: {}", resp.status());
    let body: Value = resp.json().await?;
    println!("Body: {}", serde_json::to_string_pretty(&body)?);
    println!();

    // Example 3: Loose search
    println!("3. Loose search (limit=10, threshold=40):");
    let mut request = client.get(format!("{SERVER_URL}/search")).query(&[
        ("title", "matrx"),
        ("limit", "10"),
        ("threshold", "40"),
    ]);
    if let Some(key) = &api_key {
        request = request.header("X-API-Key", key);
    }
    let resp = request.send().await?;
    println!("Status: {}", resp.status());
    let body: Value = resp.json().await?;
    println!("Body: {}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
