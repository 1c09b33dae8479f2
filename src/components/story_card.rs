//! Story Card Component
//!
//! One front-page item with its points, link and annotations.

use leptos::prelude::*;

use crate::display::StoryView;
use crate::store::{store_add_annotation, use_app_store, AppStateStoreFields};

/// Enter submits, except while an IME composition is being confirmed
pub fn is_submit_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

#[component]
pub fn StoryCard(story: StoryView) -> impl IntoView {
    let store = use_app_store();
    let item_id = StoredValue::new(story.id.clone());
    let (draft, set_draft) = signal(String::new());

    // Enter and the button share this; rejected text stays in the input
    let submit = move || {
        let text = draft.get_untracked();
        let accepted = item_id.with_value(|id| store_add_annotation(&store, id, &text));
        if accepted {
            set_draft.set(String::new());
        }
    };

    let annotations = move || {
        item_id.with_value(|id| store.view().read().annotations_for(id).to_vec())
    };

    let points = story.points_label();
    let link = story.link.clone().map(|href| view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="read-more">
            "Read more"
        </a>
    });

    view! {
        <div class="story-card">
            <h2 class="story-title">{story.title.clone()}</h2>
            <div class="story-meta">
                <span class="story-points">{points}</span>
            </div>
            {link}
            <div class="annotation-list">
                {move || annotations().into_iter()
                    .map(|text| view! { <p class="annotation">{text}</p> })
                    .collect_view()}
            </div>
            <div class="annotation-row">
                <input
                    type="text"
                    class="annotation-input"
                    placeholder="Add a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if is_submit_key(&ev.key(), ev.is_composing()) {
                            submit();
                        }
                    }
                />
                <button type="button" class="annotation-submit" on:click=move |_| submit()>
                    "Comment"
                </button>
            </div>
        </div>
    }
}
