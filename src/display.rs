//! Display Helpers
//!
//! Maps session state to what the grid renders.

use crate::models::{FetchState, Item};
use crate::store::AppState;

/// Which of the three list states is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    /// Skeleton cards
    Loading,
    /// Error message, no grid
    Failed(String),
    /// Real cards
    Ready,
}

impl DisplayMode {
    pub fn of(fetch: &FetchState) -> Self {
        match fetch {
            FetchState::Pending => DisplayMode::Loading,
            FetchState::Failed(message) => DisplayMode::Failed(message.clone()),
            FetchState::Ready(_) => DisplayMode::Ready,
        }
    }

    /// Whether the item grid is rendered at all
    pub fn shows_grid(&self) -> bool {
        !matches!(self, DisplayMode::Failed(_))
    }

    /// Message that replaces the page after a failed load
    pub fn failure(&self) -> Option<&str> {
        match self {
            DisplayMode::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Text shown in place of the grid after a failed load
pub fn error_banner(message: &str) -> String {
    format!("An error occurred: {}", message)
}

/// Static part of one card; annotations are looked up by id when rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryView {
    pub id: String,
    pub title: String,
    pub points: u32,
    pub link: Option<String>,
}

impl StoryView {
    fn new(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            points: item.points,
            link: item.url,
        }
    }

    pub fn points_label(&self) -> String {
        format!("{} points", self.points)
    }
}

/// Cards for the visible items, in display order
pub fn story_views(state: &AppState) -> Vec<StoryView> {
    state
        .view
        .visible_items(&state.fetch)
        .into_iter()
        .map(StoryView::new)
        .collect()
}

/// Footer line under the grid
pub fn count_label(visible: usize, total: usize) -> String {
    format!("{} of {} stories", visible, total)
}
