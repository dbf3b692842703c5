use super::request::PageSizeRequest;
use super::state::PaginationState;
use crate::config::PaginationConfig;
use crate::controls::{ControlEvent, PaginationControls};

/// A collection bundled with its pagination state.
///
/// Every mutation of the collection goes through this type, so the state
/// is recomputed without the caller having to remember to do it.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    state: PaginationState,
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>) -> Self {
        let state = PaginationState::new(&items);
        Self { items, state }
    }

    pub fn with_config(items: Vec<T>, config: &PaginationConfig) -> Self {
        let state = PaginationState::with_config(&items, config);
        Self { items, state }
    }

    /// Paginator starting from an explicit page size and page.
    pub fn with_page(items: Vec<T>, page_size: impl Into<PageSizeRequest>, page: i64) -> Self {
        let state = PaginationState::initialize(&items, page_size, page);
        Self { items, state }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_items(&self) -> &[T] {
        self.state.current_items(&self.items)
    }

    pub fn controls(&self) -> PaginationControls {
        PaginationControls::new(self.state)
    }

    pub fn set_page(&mut self, requested: i64) -> &[T] {
        self.state = self.state.set_page(requested);
        self.current_items()
    }

    pub fn set_page_size(&mut self, requested: impl Into<PageSizeRequest>) -> &[T] {
        self.state = self.state.set_page_size(requested);
        self.current_items()
    }

    /// Forward a control event into the state.
    pub fn apply(&mut self, event: ControlEvent) -> &[T] {
        self.state = event.apply(self.state);
        self.current_items()
    }

    pub fn next_page(&mut self) -> &[T] {
        self.state = self.state.next_page();
        self.current_items()
    }

    pub fn previous_page(&mut self) -> &[T] {
        self.state = self.state.previous_page();
        self.current_items()
    }

    pub fn first_page(&mut self) -> &[T] {
        self.state = self.state.first_page();
        self.current_items()
    }

    pub fn last_page(&mut self) -> &[T] {
        self.state = self.state.last_page();
        self.current_items()
    }

    /// Swap in a new collection and return the old one. Returns to page 1.
    pub fn replace(&mut self, items: Vec<T>) -> Vec<T> {
        let previous = std::mem::replace(&mut self.items, items);
        self.state = self.state.replace(&self.items);
        previous
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.state = self.state.recompute(&self.items);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
        self.state = self.state.recompute(&self.items);
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
        self.state = self.state.recompute(&self.items);
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for Paginator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::ResetPolicy;

    #[test]
    fn test_push_recomputes_and_resets() {
        let mut paginator: Paginator<u32> = (0..20).collect();
        paginator.set_page(2);
        assert_eq!(paginator.state().total_pages(), 2);

        paginator.push(20);
        assert_eq!(paginator.state().total_items(), 21);
        assert_eq!(paginator.state().total_pages(), 3);
        assert_eq!(paginator.state().page(), 1);
    }

    #[test]
    fn test_retain_under_replace_only_policy() {
        let config = PaginationConfig::default().reset_policy(ResetPolicy::OnReplaceOnly);
        let mut paginator = Paginator::with_config((0..30).collect::<Vec<u32>>(), &config);
        paginator.set_page(3);

        paginator.retain(|n| n % 2 == 0);
        assert_eq!(paginator.state().total_items(), 15);
        assert_eq!(paginator.state().page(), 2);
        assert_eq!(paginator.current_items(), &[20, 22, 24, 26, 28]);
    }

    #[test]
    fn test_replace_returns_previous_items() {
        let mut paginator = Paginator::with_page(vec!["a", "b", "c"], 1, 3);
        assert_eq!(paginator.current_items(), &["c"]);

        let previous = paginator.replace(vec!["x", "y"]);
        assert_eq!(previous, vec!["a", "b", "c"]);
        assert_eq!(paginator.state().page(), 1);
        assert_eq!(paginator.current_items(), &["x"]);
    }

    #[test]
    fn test_navigation_returns_current_items() {
        let mut paginator: Paginator<u32> = (0..7).collect();
        paginator.set_page_size(3);
        assert_eq!(paginator.next_page(), &[3, 4, 5]);
        assert_eq!(paginator.last_page(), &[6]);
        assert_eq!(paginator.previous_page(), &[3, 4, 5]);
        assert_eq!(paginator.first_page(), &[0, 1, 2]);
        assert_eq!(paginator.apply(ControlEvent::PageChange(3)), &[6]);
    }

    #[test]
    fn test_extend_and_into_items() {
        let mut paginator = Paginator::default();
        paginator.extend(1..=4);
        assert_eq!(paginator.state().total_items(), 4);
        assert_eq!(paginator.into_items(), vec![1, 2, 3, 4]);
    }
}
