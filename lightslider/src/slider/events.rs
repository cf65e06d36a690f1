//! Routing of lightdom events to slider handlers.

use lightdom::{contains_point, Event, LayoutResult, MouseButton, ScrollContainer};

use super::Slider;

/// Whether the slider handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was delivered to the slider.
    Consumed,
    /// The event is not the slider's; pass it on.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl<C: ScrollContainer> Slider<C> {
    /// Dispatch an event using the rectangles from the last render.
    ///
    /// Mouse movement never consumes: hover is tracked on the side. Wheel
    /// events over the slider are consumed whether or not they scrolled it;
    /// whether the page still scrolls is decided by the document listeners.
    pub fn handle_event(&mut self, event: &Event, layout: &LayoutResult) -> EventResult {
        let wrapper = self.wrapper_id();

        match event {
            Event::MouseMove { x, y } => {
                if contains_point(layout, &wrapper, *x, *y) {
                    self.pointer_enter();
                } else {
                    self.pointer_leave();
                }
                EventResult::Ignored
            }
            Event::Wheel { x, y, delta_y, .. } => {
                if !contains_point(layout, &wrapper, *x, *y) {
                    return EventResult::Ignored;
                }
                self.wheel(f64::from(*delta_y));
                EventResult::Consumed
            }
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => self.handle_click(target),
            Event::Scroll { target } if *target == self.list_id() => {
                self.scrolled();
                EventResult::Consumed
            }
            Event::Resize { .. } => {
                self.refresh_pages();
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_click(&mut self, target: &str) -> EventResult {
        if self.config.buttons {
            if target == self.prev_id() {
                self.scroll_prev();
                return EventResult::Consumed;
            }
            if target == self.next_id() {
                self.scroll_next();
                return EventResult::Consumed;
            }
        }

        if self.config.dots {
            if let Some(page) = self.dot_index(target) {
                self.scroll_to_page(page);
                return EventResult::Consumed;
            }
        }

        EventResult::Ignored
    }

    /// Page index of a dot element id, if `target` is one of this slider's dots.
    fn dot_index(&self, target: &str) -> Option<usize> {
        let prefix = self.dot_id_prefix();
        target
            .strip_prefix(prefix.as_str())?
            .parse::<usize>()
            .ok()
            .filter(|page| *page < self.pages.len())
    }
}
