//! Horizontally scrolling slider widget built on `lightdom`.
//!
//! The crate provides:
//! - [`Slider`]: scroll container state with hover gated wheel handling,
//!   arrow navigation and page dots
//! - [`SliderConfig`]: the options a slider is rendered with
//! - [`Throttle`]: leading-edge rate limiter used to gate wheel and scroll
//!   handling
//! - [`pages`]: pure page arithmetic shared by the slider and its hosts

mod config;
mod error;
pub mod pages;
mod slider;
mod throttle;

pub use config::SliderConfig;
pub use error::ConfigError;
pub use slider::{EventResult, Interaction, Slider, SliderId, SCROLL_COOLDOWN, WHEEL_COOLDOWN};
pub use throttle::{Throttle, Throttled};

pub mod prelude {
    pub use crate::{EventResult, Interaction, Slider, SliderConfig, Throttle};
    pub use lightdom::{Document, Element, Event, LayoutResult, Rect, ScrollBox, ScrollContainer};
}
