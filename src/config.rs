//! Configuration
//!
//! Compile-time defaults; there is no environment or file configuration.

use log::LevelFilter;

/// Upper bound on items taken from one response
pub const MAX_ITEMS: usize = 100;

/// Skeleton cards shown while the load is pending
pub const PLACEHOLDER_COUNT: usize = 9;

const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";
const DEFAULT_TAGS: &str = "front_page";

/// Where and how much to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub endpoint: String,
    pub tags: String,
    pub hits_per_page: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tags: DEFAULT_TAGS.to_string(),
            hits_per_page: MAX_ITEMS,
        }
    }
}

impl LoaderConfig {
    /// Full request URL
    pub fn url(&self) -> String {
        format!(
            "{}?tags={}&hitsPerPage={}",
            self.endpoint, self.tags, self.hits_per_page
        )
    }

    /// Number of hits kept from a response
    pub fn limit(&self) -> usize {
        self.hits_per_page.min(MAX_ITEMS)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub loader: LoaderConfig,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
