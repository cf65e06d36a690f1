use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, true)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, false)
}

/// Whether the element with `id` was laid out and covers the point.
pub fn contains_point(layout: &LayoutResult, id: &str, x: u16, y: u16) -> bool {
    layout.get(id).is_some_and(|rect| rect.contains(x, y))
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    clickable_only: bool,
) -> Option<String> {
    // Elements the renderer skipped may still have visible children
    // (list items inside a clipped container), so only a laid out rect
    // that misses the point prunes the subtree.
    let rect = layout.get(&element.id);
    if rect.is_some_and(|rect| !rect.contains(x, y)) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.child_elements().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, clickable_only) {
            return Some(id);
        }
    }

    match rect {
        Some(_) if element.clickable || !clickable_only => Some(element.id.clone()),
        _ => None,
    }
}
