//! Element tree for a slider.
//!
//! Structure and class names are the contract with whatever themes the
//! slider:
//!
//! ```text
//! div.light_slider_wrapper
//! ├── button.arrow.left            (buttons)
//! ├── ul.light_slider[.hide-scroll]
//! │   ├── div.progress             (progress)
//! │   └── slides...
//! ├── button.arrow.right           (buttons)
//! └── div.dot-wrapper              (dots)
//!     └── button.page-dot[.current]
//! ```

use lightdom::{Element, ScrollContainer};

use super::Slider;

const WRAPPER_CLASS: &str = "light_slider_wrapper";
const GRID_COLUMNS_PROPERTY: &str = "grid-auto-columns";

impl<C: ScrollContainer> Slider<C> {
    /// Build the element tree for the current state.
    pub fn view(&self) -> Element {
        let mut wrapper = Element::div().id(self.wrapper_id()).class(WRAPPER_CLASS);
        if let Some(class) = &self.class {
            wrapper = wrapper.class(class);
        }

        if self.config.buttons {
            wrapper = wrapper.child(
                Element::button()
                    .id(self.prev_id())
                    .class("arrow left")
                    .child(Element::text(self.config.left_label())),
            );
        }

        wrapper = wrapper.child(self.list());

        if self.config.buttons {
            wrapper = wrapper.child(
                Element::button()
                    .id(self.next_id())
                    .class("arrow right")
                    .child(Element::text(self.config.right_label())),
            );
        }

        if self.config.dots {
            wrapper = wrapper.child(self.dots());
        }

        wrapper
    }

    fn list(&self) -> Element {
        let mut list = Element::ul()
            .id(self.list_id())
            .class(self.config.class_name());
        if let Some(hint) = self.config.layout_hint() {
            list = list.style(GRID_COLUMNS_PROPERTY, hint);
        }
        if self.config.progress {
            list = list.child(
                Element::div()
                    .id(format!("{}-progress", self.id))
                    .class("progress"),
            );
        }
        list.children(self.slides.iter().cloned())
    }

    fn dots(&self) -> Element {
        let dots = (0..self.pages.len()).map(|page| {
            let mut dot = Element::button()
                .id(self.dot_id(page))
                .class("page-dot")
                .data("page", page.to_string());
            if page == self.page {
                dot = dot.class("current");
            }
            dot
        });

        Element::div()
            .id(format!("{}-dots", self.id))
            .class("dot-wrapper")
            .children(dots)
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub fn wrapper_id(&self) -> String {
        self.id.to_string()
    }

    pub fn list_id(&self) -> String {
        format!("{}-list", self.id)
    }

    pub fn prev_id(&self) -> String {
        format!("{}-prev", self.id)
    }

    pub fn next_id(&self) -> String {
        format!("{}-next", self.id)
    }

    /// Id of the dot for `page`.
    pub fn dot_id(&self, page: usize) -> String {
        format!("{}{}", self.dot_id_prefix(), page)
    }

    pub(super) fn dot_id_prefix(&self) -> String {
        format!("{}-dot-", self.id)
    }
}
