//! Story Grid Component
//!
//! Renders one of the three list states: skeletons, error, or cards.

use leptos::prelude::*;

use crate::components::{SkeletonCard, StoryCard};
use crate::config::PLACEHOLDER_COUNT;
use crate::display::{count_label, story_views, DisplayMode};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StoryGrid() -> impl IntoView {
    let store = use_app_store();
    let mode = Memo::new(move |_| DisplayMode::of(&store.fetch().read()));

    move || match mode.get() {
        DisplayMode::Loading => view! {
            <div class="story-grid">
                {(0..PLACEHOLDER_COUNT).map(|_| view! { <SkeletonCard /> }).collect_view()}
            </div>
        }
        .into_any(),
        // The app replaces the whole page on failure
        DisplayMode::Failed(_) => ().into_any(),
        DisplayMode::Ready => view! {
            <div class="story-grid">
                <For
                    each=move || story_views(&store.read())
                    key=|story| story.id.clone()
                    children=move |story| view! { <StoryCard story=story /> }
                />
            </div>
            <p class="item-count">
                {move || {
                    let (visible, total) = store.read().counts();
                    count_label(visible, total)
                }}
            </p>
        }
        .into_any(),
    }
}
