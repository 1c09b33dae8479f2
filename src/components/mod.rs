//! UI Components
//!
//! Leptos components for the story page.

mod search_bar;
mod skeleton_card;
mod story_card;
mod story_grid;

pub use search_bar::SearchBar;
pub use skeleton_card::SkeletonCard;
pub use story_card::StoryCard;
pub use story_grid::StoryGrid;
