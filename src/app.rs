//! Front Page App
//!
//! Root component: provides the store and starts the one-shot load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{SearchBar, StoryGrid};
use crate::config::LoaderConfig;
use crate::display::{error_banner, DisplayMode};
use crate::loader;
use crate::store::{store_finish_load, AppState, AppStateStoreFields};

#[component]
pub fn App(loader_config: LoaderConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Runs once per mount; the result is final for the session
    spawn_local(async move {
        let outcome = loader::load(&loader_config).await;
        store_finish_load(&store, outcome);
    });

    let failure = Memo::new(move |_| {
        DisplayMode::of(&store.fetch().read())
            .failure()
            .map(str::to_string)
    });

    move || match failure.get() {
        Some(message) => view! {
            <div class="load-error">{error_banner(&message)}</div>
        }
        .into_any(),
        None => view! {
            <div class="page">
                <h1 class="page-title">"Top 100 Hacker News Stories"</h1>
                <SearchBar />
                <StoryGrid />
            </div>
        }
        .into_any(),
    }
}
