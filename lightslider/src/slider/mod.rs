//! Slider widget.
//!
//! A `Slider` owns its slides, the options it renders with and, once mounted,
//! the scroll container that shows them. Interaction state lives here too:
//!
//! - hover: while the pointer is over the slider a document wide listener
//!   keeps wheel events from scrolling the page, and vertical wheel movement
//!   scrolls the slides horizontally instead
//! - pages: scroll offsets where each dot's page starts, recomputed from live
//!   measurements
//! - current page: the dot to highlight
//!
//! # Example
//!
//! ```
//! use lightslider::prelude::*;
//!
//! let document = Document::new();
//! let slides = (0..4).map(|i| Element::li().child(Element::text(format!("Card {i}"))));
//! let mut slider = Slider::new(document, SliderConfig::new().buttons(true))
//!     .with_slides(slides);
//!
//! slider.mount(ScrollBox::new(1200.0, 300.0));
//! slider.scroll_next();
//! assert_eq!(slider.container().map(|c| c.scroll_left()), Some(300.0));
//! ```

mod events;
mod render;
mod state;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lightdom::{Document, Element, ListenerGuard, ScrollBox, ScrollContainer};

use crate::config::SliderConfig;
use crate::pages;
use crate::throttle::Throttle;

pub use events::EventResult;
pub use state::Interaction;

/// Cooldown between handled wheel events.
pub const WHEEL_COOLDOWN: Duration = Duration::from_millis(100);

/// Cooldown between scroll position checks.
pub const SCROLL_COOLDOWN: Duration = Duration::from_millis(50);

/// Unique identifier for a Slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(usize);

impl SliderId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SliderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__slider_{}", self.0)
    }
}

/// Horizontally scrolling list of slides.
#[derive(Debug)]
pub struct Slider<C = ScrollBox> {
    id: SliderId,
    config: SliderConfig,
    /// Extra classes for the wrapper element.
    class: Option<String>,
    slides: Vec<Element>,

    document: Document,
    /// Scroll container, present while mounted.
    container: Option<C>,
    /// Wheel prevention listener, present while hovered.
    hover: Option<ListenerGuard>,

    /// Start offset of each page. Empty unless dots are enabled and mounted.
    pages: Vec<f64>,
    /// Index into `pages`, 0 when there are none.
    page: usize,

    wheel_throttle: Throttle,
    scroll_throttle: Throttle,
}

impl<C: ScrollContainer> Slider<C> {
    /// Create an unmounted slider listening on `document`.
    pub fn new(document: Document, config: SliderConfig) -> Self {
        Self {
            id: SliderId::new(),
            config,
            class: None,
            slides: Vec::new(),
            document,
            container: None,
            hover: None,
            pages: Vec::new(),
            page: 0,
            wheel_throttle: Throttle::new(WHEEL_COOLDOWN),
            scroll_throttle: Throttle::new(SCROLL_COOLDOWN),
        }
    }

    pub fn with_slides(mut self, slides: impl IntoIterator<Item = Element>) -> Self {
        self.slides = slides.into_iter().collect();
        self
    }

    /// Add classes to the wrapper element.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> SliderId {
        self.id
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn slides(&self) -> &[Element] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    /// Mutable access for hosts that resize the container.
    /// Call [`refresh_pages`](Self::refresh_pages) after changing its widths.
    pub fn container_mut(&mut self) -> Option<&mut C> {
        self.container.as_mut()
    }

    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    /// Index of the highlighted page dot.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Start offset of each page.
    pub fn pages(&self) -> &[f64] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach the scroll container. Measurements are read from it from now on.
    pub fn mount(&mut self, container: C) {
        log::debug!("[slider] {} mounted", self.id);
        self.container = Some(container);
        self.refresh_pages();
    }

    /// Detach the scroll container, releasing hover and its document listener.
    pub fn unmount(&mut self) -> Option<C> {
        log::debug!("[slider] {} unmounted", self.id);
        self.hover = None;
        let container = self.container.take();
        self.refresh_pages();
        container
    }

    /// Replace the slides and recompute pages.
    pub fn set_slides(&mut self, slides: impl IntoIterator<Item = Element>) {
        self.slides = slides.into_iter().collect();
        self.refresh_pages();
    }

    /// Recompute page boundaries from the container's current measurements.
    ///
    /// Call after anything that changes the container's widths. The current
    /// page is clamped into the new range.
    pub fn refresh_pages(&mut self) {
        self.pages = match &self.container {
            Some(container) if self.config.dots => {
                let visible = container.offset_width();
                let count = pages::page_count(container.scroll_width(), visible);
                pages::page_boundaries(count, visible)
            }
            _ => Vec::new(),
        };
        self.page = self.page.min(self.pages.len().saturating_sub(1));
        log::trace!(
            "[slider] {} pages: {} (current {})",
            self.id,
            self.pages.len(),
            self.page
        );
    }
}
