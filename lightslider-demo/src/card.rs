//! Placeholder slide content.

use lightdom::Element;

/// Class every card carries.
pub const CARD_CLASS: &str = "card";

/// One placeholder card. `index` picks its label and color slot.
pub fn card(index: usize) -> Element {
    Element::li()
        .id(format!("card-{index}"))
        .class(CARD_CLASS)
        .data("tone", index.to_string())
        .child(Element::text(format!("Card {}", index + 1)))
}

pub fn cards(count: usize) -> Vec<Element> {
    (0..count).map(card).collect()
}
