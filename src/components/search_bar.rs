//! Search Bar Component
//!
//! Title filter input bound to the store's filter text.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            type="text"
            class="search-input"
            placeholder="Search stories..."
            prop:value=move || store.view().read().filter().to_string()
            on:input=move |ev| {
                store.view().write().set_filter(event_target_value(&ev));
            }
        />
    }
}
