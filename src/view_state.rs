//! View State
//!
//! Filter text and per-item annotations, plus the derivation of the
//! visible item list.

use std::collections::HashMap;

use crate::error::RejectedEmpty;
use crate::models::{FetchState, Item};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    filter: String,
    /// item id -> annotations in insertion order
    annotations: HashMap<String, Vec<String>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Replace the filter text as typed
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// Append a trimmed annotation to a loaded item.
    ///
    /// Blank text is rejected and leaves state untouched. Ids that are not
    /// loaded items are accepted but dropped, so annotation keys always name
    /// items of the ready list.
    pub fn add_annotation(
        &mut self,
        fetch: &FetchState,
        item_id: &str,
        text: &str,
    ) -> Result<(), RejectedEmpty> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RejectedEmpty);
        }
        if !fetch.contains(item_id) {
            log::warn!("annotation for unknown item {} dropped", item_id);
            return Ok(());
        }
        self.annotations
            .entry(item_id.to_string())
            .or_default()
            .push(text.to_string());
        Ok(())
    }

    pub fn annotations_for(&self, item_id: &str) -> &[String] {
        self.annotations
            .get(item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ready items whose title contains the filter, ignoring case
    pub fn visible_items(&self, fetch: &FetchState) -> Vec<Item> {
        let needle = self.filter.to_lowercase();
        fetch
            .items()
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    fn make_item(id: &str, title: &str, points: u32, url: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            points,
            url: url.map(str::to_string),
        }
    }

    fn scenario_items() -> Vec<Item> {
        vec![
            make_item("1", "Rust is fast", 120, Some("http://a")),
            make_item("2", "Go concurrency", 80, None),
        ]
    }

    fn ready() -> FetchState {
        FetchState::Ready(vec![
            make_item("1", "Rust is fast", 120, Some("http://a")),
            make_item("2", "Go concurrency", 80, None),
            make_item("3", "RUSTy bikes", 5, None),
            make_item("4", "Why Rust?", 42, None),
        ])
    }

    #[test]
    fn test_pending_shows_nothing() {
        let mut view = ViewState::new();
        assert!(view.visible_items(&FetchState::Pending).is_empty());
        view.set_filter("rust");
        assert!(view.visible_items(&FetchState::Pending).is_empty());
        assert!(view.visible_items(&FetchState::Failed("x".into())).is_empty());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let fetch = ready();
        let view = ViewState::new();
        assert_eq!(view.visible_items(&fetch), fetch.items().to_vec());
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let fetch = ready();
        let mut view = ViewState::new();
        view.set_filter("rUsT");
        let ids: Vec<String> = view
            .visible_items(&fetch)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_filter_stored_verbatim() {
        let mut view = ViewState::new();
        view.set_filter("  MiXed ");
        assert_eq!(view.filter(), "  MiXed ");
    }

    #[test]
    fn test_filter_without_match() {
        let mut view = ViewState::new();
        view.set_filter("haskell");
        assert!(view.visible_items(&ready()).is_empty());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let fetch = ready();
        let mut view = ViewState::new();
        view.set_filter("go");
        let first = view.visible_items(&fetch);
        let second = view.visible_items(&fetch);
        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_annotation_rejected() {
        let fetch = ready();
        let mut view = ViewState::new();
        view.add_annotation(&fetch, "1", "kept").unwrap();

        assert_eq!(view.add_annotation(&fetch, "1", "   "), Err(RejectedEmpty));
        assert_eq!(view.add_annotation(&fetch, "1", ""), Err(RejectedEmpty));
        assert_eq!(view.add_annotation(&fetch, "1", "\t\n"), Err(RejectedEmpty));
        assert_eq!(view.annotations_for("1"), ["kept".to_string()]);
    }

    #[test]
    fn test_annotations_keep_insertion_order() {
        let fetch = ready();
        let mut view = ViewState::new();
        view.add_annotation(&fetch, "1", "nice").unwrap();
        view.add_annotation(&fetch, "1", "great").unwrap();
        assert_eq!(view.annotations_for("1"), ["nice", "great"]);
        assert!(view.annotations_for("2").is_empty());
    }

    #[test]
    fn test_annotations_follow_item_under_filter() {
        let fetch = ready();
        let mut view = ViewState::new();
        view.add_annotation(&fetch, "4", "why not").unwrap();
        view.set_filter("why");
        let visible = view.visible_items(&fetch);
        assert_eq!(visible.len(), 1);
        assert_eq!(view.annotations_for(&visible[0].id), ["why not"]);
    }

    #[test]
    fn test_unknown_item_annotation_dropped() {
        let fetch = ready();
        let mut view = ViewState::new();
        assert_eq!(view.add_annotation(&fetch, "999", "ghost"), Ok(()));
        assert!(view.annotations_for("999").is_empty());
        assert_eq!(view, ViewState::new());
    }

    #[test]
    fn test_scenario_a_filter_go() {
        let mut fetch = FetchState::Pending;
        fetch.complete(Ok(scenario_items()));
        let mut view = ViewState::new();
        view.set_filter("go");
        let visible = view.visible_items(&fetch);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_scenario_b_failed_fetch_stays_usable() {
        let mut fetch = FetchState::Pending;
        fetch.complete(Err(LoadError::Status(502)));
        let mut view = ViewState::new();
        view.set_filter("rust");
        assert_eq!(view.add_annotation(&fetch, "1", "hello"), Ok(()));
        assert!(view.visible_items(&fetch).is_empty());
        assert!(view.annotations_for("1").is_empty());
    }

    #[test]
    fn test_scenario_c_annotation_trimmed() {
        let fetch = FetchState::Ready(scenario_items());
        let mut view = ViewState::new();
        view.add_annotation(&fetch, "2", "  insightful  ").unwrap();
        assert_eq!(view.annotations_for("2"), ["insightful"]);
    }
}
