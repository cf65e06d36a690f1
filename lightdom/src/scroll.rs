/// Measurements and scrolling for a horizontally scrolling container.
///
/// Widths follow the browser box model: `scroll_width` is the full width of
/// the content, `client_width` the visible part of it, and `offset_width` the
/// visible part plus any scrollbar or border the container draws.
pub trait ScrollContainer {
    /// Current horizontal scroll offset.
    fn scroll_left(&self) -> f64;

    /// Full width of the scrollable content.
    fn scroll_width(&self) -> f64;

    /// Width of the visible content area.
    fn client_width(&self) -> f64;

    /// Rendered width of the container itself.
    fn offset_width(&self) -> f64 {
        self.client_width()
    }

    /// Scroll to `left`, clamped to the native range.
    /// Returns true if the scroll offset changed.
    fn scroll_to(&mut self, left: f64) -> bool;

    /// Largest reachable scroll offset.
    fn max_scroll_left(&self) -> f64 {
        (self.scroll_width() - self.client_width()).max(0.0)
    }
}

/// In-memory scroll container.
///
/// Stands in for a native scrolling element: hosts update the widths after
/// layout and read `scroll_left` back when drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollBox {
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
}

impl ScrollBox {
    pub fn new(scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left: 0.0,
            scroll_width,
            client_width,
        }
    }

    pub fn set_scroll_width(&mut self, width: f64) {
        self.scroll_width = width.max(0.0);
        self.clamp();
    }

    pub fn set_client_width(&mut self, width: f64) {
        self.client_width = width.max(0.0);
        self.clamp();
    }

    /// Scroll position as a fraction of the reachable range (0.0 to 1.0).
    pub fn scroll_fraction(&self) -> f64 {
        let max = self.max_scroll_left();
        if max <= 0.0 {
            0.0
        } else {
            self.scroll_left / max
        }
    }

    fn clamp(&mut self) {
        self.scroll_left = self.scroll_left.clamp(0.0, self.max_scroll_left());
    }
}

impl ScrollContainer for ScrollBox {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn scroll_to(&mut self, left: f64) -> bool {
        let left = if left.is_finite() {
            left.clamp(0.0, self.max_scroll_left())
        } else {
            self.scroll_left
        };

        if left != self.scroll_left {
            log::trace!("[scroll] {} -> {}", self.scroll_left, left);
            self.scroll_left = left;
            true
        } else {
            false
        }
    }
}
