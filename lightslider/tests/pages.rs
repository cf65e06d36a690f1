//! Tests for page arithmetic.

use lightslider::pages::{current_page, item_width, page_boundaries, page_count, MAX_PAGES};

// ============================================================================
// Item width
// ============================================================================

#[test]
fn test_item_width_divides_scroll_width() {
    assert_eq!(item_width(1200.0, 4), Some(300.0));
    assert_eq!(item_width(1000.0, 3), Some(1000.0 / 3.0));
}

#[test]
fn test_item_width_without_items() {
    assert_eq!(item_width(1200.0, 0), None);
}

// ============================================================================
// Page count
// ============================================================================

#[test]
fn test_page_count_keeps_wide_trailing_page() {
    // 1000 / 300 = 3.33, trailing 100 is 33% of the visible width
    assert_eq!(page_count(1000.0, 300.0), 4);
}

#[test]
fn test_page_count_merges_narrow_trailing_page() {
    // 1000 / 330 = 3.03, trailing 10 is 3% of the visible width
    assert_eq!(page_count(1000.0, 330.0), 3);
    // 1000 / 260 = 3.85, trailing 220 is 85%
    assert_eq!(page_count(1000.0, 260.0), 4);
}

#[test]
fn test_page_count_exact_fit() {
    assert_eq!(page_count(1200.0, 300.0), 4);
    assert_eq!(page_count(300.0, 300.0), 1);
}

#[test]
fn test_page_count_never_merges_the_only_page() {
    assert_eq!(page_count(50.0, 300.0), 1);
}

#[test]
fn test_page_count_degenerate_widths() {
    assert_eq!(page_count(0.0, 300.0), 0);
    assert_eq!(page_count(1000.0, 0.0), 0);
    assert_eq!(page_count(f64::NAN, 300.0), 0);
}

#[test]
fn test_page_count_extreme_ratios() {
    assert_eq!(page_count(f64::INFINITY, 300.0), 0);
    assert_eq!(page_count(f64::MAX, f64::MIN_POSITIVE), 0);
    assert_eq!(page_count(1e12, 1.0), MAX_PAGES);
    assert_eq!(page_boundaries(page_count(1e12, 1.0), 1.0).len(), MAX_PAGES);
}

#[test]
fn test_page_boundaries() {
    assert_eq!(page_boundaries(4, 300.0), vec![0.0, 300.0, 600.0, 900.0]);
    assert!(page_boundaries(0, 300.0).is_empty());
}

// ============================================================================
// Current page
// ============================================================================

#[test]
fn test_current_page_highest_boundary_not_past_offset() {
    let boundaries = page_boundaries(4, 300.0);
    assert_eq!(current_page(&boundaries, 0.0, 300.0, 1200.0, 0), 0);
    assert_eq!(current_page(&boundaries, 299.0, 300.0, 1200.0, 0), 0);
    assert_eq!(current_page(&boundaries, 300.0, 300.0, 1200.0, 0), 1);
    assert_eq!(current_page(&boundaries, 700.0, 300.0, 1200.0, 0), 2);
}

#[test]
fn test_current_page_snaps_to_last_near_end() {
    let boundaries = page_boundaries(4, 300.0);
    // 850 + 300 = 1150 >= 95% of 1200
    assert_eq!(current_page(&boundaries, 850.0, 300.0, 1200.0, 0), 3);
}

#[test]
fn test_current_page_without_boundaries_keeps_previous() {
    assert_eq!(current_page(&[], 500.0, 300.0, 1200.0, 0), 0);
}
