//! Error Types
//!
//! Load failures are terminal for the session; blank annotations are
//! rejected locally and never surfaced.

use thiserror::Error;

/// Why the front-page load failed
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Network response was not ok (HTTP {0})")]
    Status(u16),
    #[error("Unexpected response format: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Annotation text was empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("annotation is empty")]
pub struct RejectedEmpty;
