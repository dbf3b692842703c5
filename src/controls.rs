//! Display-side contract for a paged table: range summary, navigation
//! enablement, page-size choices, and the events a control surface emits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_PAGE_SIZE, PaginationState};
use crate::pagination::state::page_as_request;

/// Page sizes offered when nothing else is configured.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// The 1-based "showing start-end of total" triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl RangeSummary {
    pub fn from_state(state: &PaginationState) -> Self {
        let total = state.total_items();
        let offset = (state.page() - 1).saturating_mul(state.page_size());
        let start = if total == 0 { 0 } else { offset + 1 };
        let end = total.min(state.page().saturating_mul(state.page_size()));
        Self { start, end, total }
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}-{} of {}", self.start, self.end, self.total)
    }
}

/// Event emitted by a pagination control surface.
///
/// Values are carried verbatim; clamping and validation happen when the
/// event is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    PageChange(i64),
    PageSizeChange(i64),
}

impl ControlEvent {
    pub fn first() -> Self {
        ControlEvent::PageChange(1)
    }

    pub fn previous(state: &PaginationState) -> Self {
        ControlEvent::PageChange(page_as_request(state.page()).saturating_sub(1))
    }

    pub fn next(state: &PaginationState) -> Self {
        ControlEvent::PageChange(page_as_request(state.page()).saturating_add(1))
    }

    pub fn last(state: &PaginationState) -> Self {
        ControlEvent::PageChange(page_as_request(state.total_pages()))
    }

    /// Page-size change for a selector choice; sizes past `i64::MAX`
    /// saturate instead of wrapping negative.
    pub fn page_size(size: usize) -> Self {
        ControlEvent::PageSizeChange(i64::try_from(size).unwrap_or(i64::MAX))
    }

    /// Forward the event into `set_page` / `set_page_size`.
    #[must_use]
    pub fn apply(self, state: PaginationState) -> PaginationState {
        match self {
            ControlEvent::PageChange(page) => state.set_page(page),
            ControlEvent::PageSizeChange(size) => state.set_page_size(size),
        }
    }
}

/// The fixed set of page sizes a selector offers, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct PageSizeOptions(Vec<usize>);

impl PageSizeOptions {
    /// Build from arbitrary sizes; zeros are dropped, the rest sorted and
    /// deduplicated. Returns `None` when nothing usable remains.
    pub fn new(sizes: impl IntoIterator<Item = usize>) -> Option<Self> {
        let mut sizes: Vec<usize> = sizes.into_iter().filter(|size| *size > 0).collect();
        sizes.sort_unstable();
        sizes.dedup();
        (!sizes.is_empty()).then_some(Self(sizes))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn contains(&self, size: usize) -> bool {
        self.0.binary_search(&size).is_ok()
    }

    /// The next larger option, staying on the largest one.
    pub fn next_after(&self, size: usize) -> usize {
        self.0
            .iter()
            .copied()
            .find(|option| *option > size)
            .unwrap_or_else(|| self.largest())
    }

    /// The next smaller option, staying on the smallest one.
    pub fn previous_before(&self, size: usize) -> usize {
        self.0
            .iter()
            .rev()
            .copied()
            .find(|option| *option < size)
            .unwrap_or_else(|| self.smallest())
    }

    // Every constructor rejects an empty list, so the fallbacks are never hit.
    pub fn smallest(&self) -> usize {
        self.0.first().copied().unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn largest(&self) -> usize {
        self.0.last().copied().unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

impl Default for PageSizeOptions {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl TryFrom<Vec<usize>> for PageSizeOptions {
    type Error = String;

    fn try_from(sizes: Vec<usize>) -> Result<Self, Self::Error> {
        if sizes.contains(&0) {
            return Err("page size options must be > 0".to_string());
        }
        Self::new(sizes).ok_or_else(|| "page size options cannot be empty".to_string())
    }
}

impl From<PageSizeOptions> for Vec<usize> {
    fn from(options: PageSizeOptions) -> Self {
        options.0
    }
}

/// Read-only model behind a pagination control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    state: PaginationState,
    disabled: bool,
}

impl PaginationControls {
    pub fn new(state: PaginationState) -> Self {
        Self {
            state,
            disabled: false,
        }
    }

    /// Disable every navigation control, e.g. while a fetch is in flight.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn can_previous(&self) -> bool {
        !self.disabled && self.state.page() > 1
    }

    pub fn can_next(&self) -> bool {
        !self.disabled && self.state.page() < self.state.total_pages()
    }

    pub fn summary(&self) -> RangeSummary {
        RangeSummary::from_state(&self.state)
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.state.page(), self.state.total_pages())
    }
}
