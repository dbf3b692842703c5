// ============================================================================
// RustPager Library
// ============================================================================

pub mod config;
pub mod controls;
pub mod core;
pub mod pagination;

// Re-export main types for convenience
pub use config::PaginationConfig;
pub use controls::{
    ControlEvent, DEFAULT_PAGE_SIZE_OPTIONS, PageSizeOptions, PaginationControls, RangeSummary,
};
pub use crate::core::{PagerError, Result};
pub use pagination::{
    DEFAULT_PAGE_SIZE, PageSizeRequest, PaginationState, Paginator, ResetPolicy, clamp_page,
    page_window, total_pages,
};

// ============================================================================
// Top-level helpers
// ============================================================================

/// Page `collection` in one call.
///
/// Returns the clamped state together with the items on the resolved page.
///
/// # Examples
///
/// ```
/// let rows: Vec<u32> = (0..23).collect();
/// let (state, page) = rustpager::paginate(&rows, 10, 99);
///
/// assert_eq!(state.page(), 3);
/// assert_eq!(page, &[20, 21, 22]);
/// ```
pub fn paginate<T>(
    collection: &[T],
    page_size: impl Into<PageSizeRequest>,
    page: i64,
) -> (PaginationState, &[T]) {
    let state = PaginationState::initialize(collection, page_size, page);
    (state, state.current_items(collection))
}
