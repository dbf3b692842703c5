//! Pure page math shared by the engine and the display controls.

use std::ops::Range;

/// Number of pages needed for `total_items` at `page_size` items per page.
///
/// Never returns 0: an empty collection still has one (empty) page, and a
/// zero page size is treated as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested 1-based page into `[1, total_pages]`.
///
/// Accepts signed input so that negative requests from UI events resolve to
/// the first page instead of wrapping.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let upper = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(upper, |page| page.min(upper))
}

/// Index range of the items shown on `page`, bounded by `total_items`.
pub fn page_window(total_items: usize, page_size: usize, page: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_total_pages_floors_to_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(0, 0), 1);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-7, 3), 1);
        assert_eq!(clamp_page(i64::MIN, 3), 1);
        assert_eq!(clamp_page(i64::MAX, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(23, 10, 1), 0..10);
        assert_eq!(page_window(23, 10, 3), 20..23);
        assert_eq!(page_window(0, 10, 1), 0..0);
        // Past the end collapses to an empty range instead of panicking.
        assert_eq!(page_window(5, 10, 4), 5..5);
        assert_eq!(page_window(5, 10, usize::MAX), 5..5);
    }
}
