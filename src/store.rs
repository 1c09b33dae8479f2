//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the only owner of session state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{LoadError, RejectedEmpty};
use crate::models::{FetchState, Item};
use crate::view_state::ViewState;

/// Session state: the load result and what the user has done with it
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Outcome of the one front-page load
    pub fetch: FetchState,
    /// Filter text and annotations
    pub view: ViewState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate a loaded item; both fields are borrowed from one lock
    pub fn add_annotation(&mut self, item_id: &str, text: &str) -> Result<(), RejectedEmpty> {
        self.view.add_annotation(&self.fetch, item_id, text)
    }

    /// (visible, total) item counts
    pub fn counts(&self) -> (usize, usize) {
        (
            self.view.visible_items(&self.fetch).len(),
            self.fetch.items().len(),
        )
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Settle the store's fetch state with a finished load
pub fn store_finish_load(store: &AppStore, outcome: Result<Vec<Item>, LoadError>) {
    store.fetch().write().complete(outcome);
}

/// Submit an annotation; returns whether it was accepted
pub fn store_add_annotation(store: &AppStore, item_id: &str, text: &str) -> bool {
    store.write().add_annotation(item_id, text).is_ok()
}
