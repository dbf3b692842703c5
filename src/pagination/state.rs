use std::ops::Range;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::request::PageSizeRequest;
use super::window::{clamp_page, page_window, total_pages};
use crate::config::PaginationConfig;

/// Items per page when the caller does not ask for anything else.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What a change in collection length does to the selected page.
///
/// Replacing the collection always returns to page 1; this only governs
/// length changes reported through [`PaginationState::recompute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Any length change returns to page 1.
    #[default]
    OnLengthChange,
    /// Length changes keep the page, clamped to the new page count.
    OnReplaceOnly,
}

/// Pagination state for one paged view.
///
/// Every transition consumes the state and returns the next one, so a
/// caller can keep it in a plain field and reassign. The invariants
/// `1 <= page <= total_pages` and `page_size >= 1` hold for every value
/// this type can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
    reset_policy: ResetPolicy,
}

impl PaginationState {
    /// State over `collection` with the default page size, on page 1.
    pub fn new<T>(collection: &[T]) -> Self {
        Self::initialize(collection, DEFAULT_PAGE_SIZE, 1)
    }

    /// State over `collection` with the requested page size and page.
    ///
    /// An unusable page size falls back to [`DEFAULT_PAGE_SIZE`]; the page
    /// is clamped into range.
    pub fn initialize<T>(
        collection: &[T],
        page_size: impl Into<PageSizeRequest>,
        page: i64,
    ) -> Self {
        let page_size = page_size.into().resolve().unwrap_or(DEFAULT_PAGE_SIZE);
        let total_items = collection.len();
        let total_pages = total_pages(total_items, page_size);

        Self {
            page: clamp_page(page, total_pages),
            page_size,
            total_items,
            total_pages,
            reset_policy: ResetPolicy::default(),
        }
    }

    /// State over `collection` using the configured default page size and
    /// reset policy.
    pub fn with_config<T>(collection: &[T], config: &PaginationConfig) -> Self {
        Self::initialize(collection, config.default_page_size, 1).reset_policy(config.reset_policy)
    }

    /// Set the reset policy used by later recomputes.
    #[must_use]
    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Recompute derived fields after the collection changed in place.
    #[must_use]
    pub fn recompute<T>(self, collection: &[T]) -> Self {
        self.recompute_len(collection.len())
    }

    /// Recompute derived fields for a collection of `total_items` items.
    ///
    /// The page is always clamped to the new page count. Under
    /// [`ResetPolicy::OnLengthChange`] a changed length also returns to
    /// page 1.
    #[must_use]
    pub fn recompute_len(mut self, total_items: usize) -> Self {
        let length_changed = total_items != self.total_items;
        self.total_items = total_items;
        self.total_pages = total_pages(total_items, self.page_size);

        if length_changed && self.reset_policy == ResetPolicy::OnLengthChange {
            self.page = 1;
        } else if self.page > self.total_pages {
            debug!(
                "Clamping stale page {} to {} after recompute",
                self.page, self.total_pages
            );
            self.page = self.total_pages;
        }

        trace!(
            "Recomputed pagination: {} items, {} pages, page {}",
            self.total_items, self.total_pages, self.page
        );
        self
    }

    /// Point the state at a different collection. Always returns to page 1.
    #[must_use]
    pub fn replace<T>(mut self, collection: &[T]) -> Self {
        self.total_items = collection.len();
        self.total_pages = total_pages(self.total_items, self.page_size);
        self.page = 1;
        self
    }

    /// Select `requested`, clamped into `[1, total_pages]`.
    #[must_use]
    pub fn set_page(mut self, requested: i64) -> Self {
        let page = clamp_page(requested, self.total_pages);
        if i64::try_from(page) != Ok(requested) {
            debug!(
                "Requested page {} out of range, clamped to {} of {}",
                requested, page, self.total_pages
            );
        }
        self.page = page;
        self
    }

    /// Change the page size and return to page 1.
    ///
    /// An unusable request keeps the current size but still resets the
    /// page.
    #[must_use]
    pub fn set_page_size(mut self, requested: impl Into<PageSizeRequest>) -> Self {
        let requested = requested.into();
        match requested.resolve() {
            Some(page_size) => {
                self.page_size = page_size;
                self.total_pages = total_pages(self.total_items, page_size);
            }
            None => debug!(
                "Ignoring page size request {:?}, keeping {}",
                requested, self.page_size
            ),
        }
        self.page = 1;
        self
    }

    #[must_use]
    pub fn first_page(self) -> Self {
        self.set_page(1)
    }

    #[must_use]
    pub fn last_page(self) -> Self {
        let last = self.total_pages;
        self.set_page(page_as_request(last))
    }

    #[must_use]
    pub fn next_page(self) -> Self {
        let next = page_as_request(self.page).saturating_add(1);
        self.set_page(next)
    }

    #[must_use]
    pub fn previous_page(self) -> Self {
        let previous = page_as_request(self.page).saturating_sub(1);
        self.set_page(previous)
    }

    /// Index range of the current page within a collection of
    /// `total_items` items.
    pub fn item_range(&self) -> Range<usize> {
        page_window(self.total_items, self.page_size, self.page)
    }

    /// The items on the current page.
    ///
    /// Bounded by the length of `collection` itself, so a collection that
    /// shrank without a recompute yields a short or empty slice rather
    /// than a panic.
    pub fn current_items<'a, T>(&self, collection: &'a [T]) -> &'a [T] {
        &collection[page_window(collection.len(), self.page_size, self.page)]
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new::<()>(&[])
    }
}

pub(crate) fn page_as_request(page: usize) -> i64 {
    i64::try_from(page).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn test_initialize_defaults() {
        let items = numbers(23);
        let state = PaginationState::new(&items);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(state.total_items(), 23);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_initialize_clamps_and_defaults() {
        let items = numbers(23);

        let state = PaginationState::initialize(&items, 0, 1);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);

        let state = PaginationState::initialize(&items, 5, 100);
        assert_eq!(state.page(), 5);

        let state = PaginationState::initialize(&items, f64::NAN, -4);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_default_state_is_one_empty_page() {
        let state = PaginationState::default();
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page(), 1);
        assert_eq!(state.item_range(), 0..0);
    }

    #[test]
    fn test_length_change_resets_page() {
        let items = numbers(50);
        let state = PaginationState::new(&items).set_page(4);
        assert_eq!(state.page(), 4);

        let state = state.recompute_len(51);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_same_length_keeps_page() {
        let items = numbers(50);
        let state = PaginationState::new(&items).set_page(4).recompute(&items);
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn test_replace_only_policy_clamps() {
        let items = numbers(50);
        let state = PaginationState::new(&items)
            .reset_policy(ResetPolicy::OnReplaceOnly)
            .set_page(4);

        let grown = state.recompute_len(51);
        assert_eq!(grown.page(), 4);

        let shrunk = state.recompute_len(12);
        assert_eq!(shrunk.total_pages(), 2);
        assert_eq!(shrunk.page(), 2);

        let replaced = state.replace(&numbers(50));
        assert_eq!(replaced.page(), 1);
    }

    #[test]
    fn test_navigation_helpers() {
        let items = numbers(23);
        let state = PaginationState::new(&items);

        assert_eq!(state.previous_page().page(), 1);
        assert_eq!(state.next_page().page(), 2);
        assert_eq!(state.last_page().page(), 3);
        assert_eq!(state.last_page().next_page().page(), 3);
        assert_eq!(state.last_page().first_page().page(), 1);
    }

    #[test]
    fn test_current_items_tolerates_shorter_collection() {
        let items = numbers(23);
        let state = PaginationState::new(&items).set_page(3);

        let shorter = numbers(15);
        assert!(state.current_items(&shorter).is_empty());
        assert_eq!(state.current_items(&items), &[20, 21, 22]);
    }

    #[test]
    fn test_reset_policy_deserializes_snake_case() {
        let policy: ResetPolicy = serde_json::from_str("\"on_replace_only\"").unwrap();
        assert_eq!(policy, ResetPolicy::OnReplaceOnly);
    }
}
