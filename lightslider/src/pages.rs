//! Page arithmetic.
//!
//! Everything here is a pure function of live measurements so callers can
//! recompute on mount, resize or content change instead of caching.

/// A trailing partial page narrower than this share of the visible width is
/// merged into the page before it.
pub const TRAILING_PAGE_MERGE_RATIO: f64 = 0.2;

/// Past this share of the total scroll width the last page is current.
pub const END_SNAP_RATIO: f64 = 0.95;

/// Upper bound on [`page_count`], whatever the width ratio.
pub const MAX_PAGES: usize = 100_000;

/// Step for one item of navigation: total scroll width over item count.
/// `None` when there are no items.
pub fn item_width(scroll_width: f64, item_count: usize) -> Option<f64> {
    if item_count == 0 {
        return None;
    }
    Some(scroll_width / item_count as f64)
}

/// Number of pages needed to show `scroll_width` through a `visible_width`
/// window.
///
/// The count is `ceil(scroll_width / visible_width)`, less one when the last
/// page would show less than [`TRAILING_PAGE_MERGE_RATIO`] of new content.
/// Zero when either width is not positive or the ratio is not finite, and
/// never more than [`MAX_PAGES`].
pub fn page_count(scroll_width: f64, visible_width: f64) -> usize {
    if !(scroll_width > 0.0 && visible_width > 0.0) {
        return 0;
    }

    let raw = scroll_width / visible_width;
    if !raw.is_finite() {
        return 0;
    }
    if raw > MAX_PAGES as f64 {
        return MAX_PAGES;
    }
    let full_pages = raw.floor();
    let mut count = raw.ceil() as usize;

    let remainder = scroll_width - full_pages * visible_width;
    if count > 1 && remainder > 0.0 && remainder < visible_width * TRAILING_PAGE_MERGE_RATIO {
        count -= 1;
    }
    count
}

/// Scroll offset at which each page starts.
pub fn page_boundaries(count: usize, visible_width: f64) -> Vec<f64> {
    (0..count).map(|page| page as f64 * visible_width).collect()
}

/// Page containing `scroll_left`.
///
/// Near the end of the content (the visible window reaching past
/// [`END_SNAP_RATIO`] of `scroll_width`) the last page wins, since the final
/// page may never scroll to its own boundary. Otherwise the highest boundary
/// not past `scroll_left` wins. With no boundaries, `previous` is kept.
pub fn current_page(
    boundaries: &[f64],
    scroll_left: f64,
    offset_width: f64,
    scroll_width: f64,
    previous: usize,
) -> usize {
    if boundaries.is_empty() {
        return previous;
    }
    if scroll_left + offset_width >= scroll_width * END_SNAP_RATIO {
        return boundaries.len() - 1;
    }
    boundaries
        .iter()
        .rposition(|boundary| *boundary <= scroll_left)
        .unwrap_or(previous)
}
