//! Skeleton Card Component
//!
//! Placeholder shown while the front page is loading.

use leptos::prelude::*;

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="story-card skeleton-card">
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-line"></div>
            <div class="skeleton skeleton-button"></div>
        </div>
    }
}
