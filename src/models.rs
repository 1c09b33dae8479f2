//! Frontend Models
//!
//! Front-page items and the one-shot fetch state.

use serde::Deserialize;

use crate::error::LoadError;

/// One front-page story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub points: u32,
    pub url: Option<String>,
}

/// Search API response envelope
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
}

/// A single hit as the search API sends it
#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub title: String,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<Hit> for Item {
    fn from(hit: Hit) -> Self {
        Self {
            id: hit.object_id,
            title: hit.title,
            points: hit.points.unwrap_or(0),
            url: hit.url.filter(|u| !u.is_empty()),
        }
    }
}

/// Result of the single outbound load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Pending,
    Ready(Vec<Item>),
    Failed(String),
}

impl FetchState {
    /// Items when ready, otherwise nothing
    pub fn items(&self) -> &[Item] {
        match self {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// Whether `item_id` names a loaded item
    pub fn contains(&self, item_id: &str) -> bool {
        self.items().iter().any(|item| item.id == item_id)
    }

    /// Apply the load outcome. Only `Pending` transitions; a settled state
    /// never changes again.
    pub fn complete(&mut self, outcome: Result<Vec<Item>, LoadError>) {
        if !self.is_pending() {
            log::warn!("fetch already settled, ignoring late completion");
            return;
        }
        *self = match outcome {
            Ok(items) => FetchState::Ready(items),
            Err(e) => FetchState::Failed(e.to_string()),
        };
    }
}
