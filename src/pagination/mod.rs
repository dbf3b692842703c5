//! Client-side windowing over an in-memory collection.
//!
//! [`PaginationState`] is the engine: a small value holding the selected
//! page and page size plus the counts derived from the collection.
//! [`Paginator`] bundles a state with an owned collection.

pub mod paginator;
pub mod request;
pub mod state;
pub mod window;

pub use paginator::Paginator;
pub use request::PageSizeRequest;
pub use state::{DEFAULT_PAGE_SIZE, PaginationState, ResetPolicy};
pub use window::{clamp_page, page_window, total_pages};
