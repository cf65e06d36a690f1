//! Hover, wheel and navigation handling.

use lightdom::{ScrollContainer, WHEEL_LINE_DELTA};

use super::Slider;
use crate::pages;

/// Slack when comparing float offsets against the scroll extremes.
const EDGE_TOLERANCE: f64 = 0.5;

/// Whether the slider is intercepting wheel events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Wheel events pass through to the page.
    #[default]
    Idle,
    /// Pointer is over the slider; wheel events scroll the slides.
    Hovered,
}

impl<C: ScrollContainer> Slider<C> {
    pub fn interaction(&self) -> Interaction {
        if self.hover.is_some() {
            Interaction::Hovered
        } else {
            Interaction::Idle
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_some()
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    /// Start intercepting wheel events. Returns true if the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        if self.hover.is_some() {
            return false;
        }
        log::debug!("[slider] {} hovered", self.id);
        self.hover = Some(self.document.prevent_wheel_default());
        true
    }

    /// Stop intercepting wheel events. Returns true if the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        if self.hover.take().is_some() {
            log::debug!("[slider] {} released", self.id);
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Wheel
    // -------------------------------------------------------------------------

    /// Throttled wheel handler. Returns false if the event was dropped by the
    /// cooldown.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if !self.wheel_throttle.ready() {
            log::trace!("[slider] {} wheel throttled", self.id);
            return false;
        }
        self.apply_wheel(delta_y);
        true
    }

    /// Translate a vertical wheel delta into horizontal scrolling.
    ///
    /// Only acts while hovered. Scrolling further back at the start, or
    /// further forward at the end, releases hover instead so the page can
    /// take over.
    pub fn apply_wheel(&mut self, delta_y: f64) {
        if self.hover.is_none() {
            return;
        }
        let Some(container) = &self.container else {
            return;
        };

        let left = container.scroll_left();
        let at_start = left <= EDGE_TOLERANCE;
        let at_end = left + container.client_width() >= container.scroll_width() - EDGE_TOLERANCE;

        if delta_y > 0.0 && at_end {
            log::debug!("[slider] {} reached end", self.id);
            self.pointer_leave();
        } else if delta_y < 0.0 && at_start {
            log::debug!("[slider] {} reached start", self.id);
            self.pointer_leave();
        } else if let Some(step) = pages::item_width(container.scroll_width(), self.slides.len()) {
            let target = left + step * delta_y / f64::from(WHEEL_LINE_DELTA);
            self.scroll_container_to(target);
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Scroll forward by one item width.
    pub fn scroll_next(&mut self) -> bool {
        self.scroll_by_items(1.0)
    }

    /// Scroll back by one item width.
    pub fn scroll_prev(&mut self) -> bool {
        self.scroll_by_items(-1.0)
    }

    /// Scroll to the start of page `index` (`index` times the visible width).
    pub fn scroll_to_page(&mut self, index: usize) -> bool {
        let Some(container) = &self.container else {
            return false;
        };
        let target = index as f64 * container.offset_width();
        log::debug!("[slider] {} scrolling to page {}", self.id, index);
        self.scroll_container_to(target)
    }

    fn scroll_by_items(&mut self, items: f64) -> bool {
        let Some(container) = &self.container else {
            return false;
        };
        let Some(step) = pages::item_width(container.scroll_width(), self.slides.len()) else {
            return false;
        };
        let target = container.scroll_left() + step * items;
        self.scroll_container_to(target)
    }

    /// Move the container and, if it moved, report the scroll the way a
    /// native element would.
    fn scroll_container_to(&mut self, left: f64) -> bool {
        let moved = self
            .container
            .as_mut()
            .is_some_and(|container| container.scroll_to(left));
        if moved {
            self.scrolled();
        }
        moved
    }

    // -------------------------------------------------------------------------
    // Scroll tracking
    // -------------------------------------------------------------------------

    /// Throttled scroll handler. Only tracks pages when dots are enabled.
    /// Returns false if nothing was checked.
    pub fn scrolled(&mut self) -> bool {
        if !self.config.dots || self.container.is_none() || !self.scroll_throttle.ready() {
            return false;
        }
        self.track_scroll();
        true
    }

    /// Update the current page from the container's scroll offset.
    pub fn track_scroll(&mut self) {
        let Some(container) = &self.container else {
            return;
        };
        let page = pages::current_page(
            &self.pages,
            container.scroll_left(),
            container.offset_width(),
            container.scroll_width(),
            self.page,
        );
        if page != self.page {
            log::trace!("[slider] {} page {} -> {}", self.id, self.page, page);
            self.page = page;
        }
    }
}
