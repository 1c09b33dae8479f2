//! Data Loader
//!
//! One outbound request for the front page. The first outcome is final.

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::models::{Item, SearchResponse};

/// Fetch the front page once. The outcome settles a pending `FetchState`.
pub async fn load(config: &LoaderConfig) -> Result<Vec<Item>, LoadError> {
    let outcome = fetch_items(config).await;
    match &outcome {
        Ok(items) => log::info!("loaded {} items", items.len()),
        Err(e) => log::error!("load failed: {}", e),
    }
    outcome
}

async fn fetch_items(config: &LoaderConfig) -> Result<Vec<Item>, LoadError> {
    let url = config.url();
    log::debug!("GET {}", url);

    let response = reqwest::Client::new().get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    parse_hits(&body, config.limit())
}

/// Decode a search response body, keeping server order and at most `limit` hits
pub fn parse_hits(body: &str, limit: usize) -> Result<Vec<Item>, LoadError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .hits
        .into_iter()
        .take(limit)
        .map(Item::from)
        .collect())
}
