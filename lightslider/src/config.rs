//! Slider options.

use serde::Deserialize;

use crate::error::ConfigError;

const BASE_CLASS: &str = "light_slider";
const HIDE_SCROLL_CLASS: &str = "hide-scroll";
const DEFAULT_LEFT_ARROW: &str = "<";
const DEFAULT_RIGHT_ARROW: &str = ">";

/// Options a slider is rendered with. Every feature is off by default.
///
/// Field names deserialize from camelCase (`hideScroll`, `perPage`, ...).
///
/// # Example
///
/// ```
/// use lightslider::SliderConfig;
///
/// let config = SliderConfig::new().buttons(true).dots(true).per_page(2);
/// assert_eq!(config.layout_hint().as_deref(), Some("50%"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Render previous/next buttons.
    pub buttons: bool,
    /// Label of the previous button, `<` when absent.
    pub left_arrow: Option<String>,
    /// Label of the next button, `>` when absent.
    pub right_arrow: Option<String>,
    /// Render a progress marker inside the slide list.
    pub progress: bool,
    /// Hide the native scrollbar while keeping the list scrollable.
    pub hide_scroll: bool,
    /// Number of slides visible at once.
    pub per_page: Option<u16>,
    /// Render one dot per page.
    pub dots: bool,
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buttons(mut self, buttons: bool) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn left_arrow(mut self, label: impl Into<String>) -> Self {
        self.left_arrow = Some(label.into());
        self
    }

    pub fn right_arrow(mut self, label: impl Into<String>) -> Self {
        self.right_arrow = Some(label.into());
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn hide_scroll(mut self, hide_scroll: bool) -> Self {
        self.hide_scroll = hide_scroll;
        self
    }

    pub fn per_page(mut self, per_page: u16) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn dots(mut self, dots: bool) -> Self {
        self.dots = dots;
        self
    }

    /// Reject values that cannot be laid out.
    ///
    /// The slider never calls this itself; hosts loading options from outside
    /// decide whether bad input is an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.per_page {
            Some(0) => Err(ConfigError::ZeroPerPage),
            _ => Ok(()),
        }
    }

    /// Class attribute of the slide list.
    pub fn class_name(&self) -> String {
        let mut classes = vec![BASE_CLASS];
        if self.hide_scroll {
            classes.push(HIDE_SCROLL_CLASS);
        }
        classes.join(" ")
    }

    /// Width of one slide as a percentage of the list (`grid-auto-columns`).
    /// `None` when `per_page` is unset or zero.
    pub fn layout_hint(&self) -> Option<String> {
        self.per_page
            .filter(|n| *n > 0)
            .map(|n| format!("{}%", 100.0 / f64::from(n)))
    }

    pub fn left_label(&self) -> &str {
        self.left_arrow.as_deref().unwrap_or(DEFAULT_LEFT_ARROW)
    }

    pub fn right_label(&self) -> &str {
        self.right_arrow.as_deref().unwrap_or(DEFAULT_RIGHT_ARROW)
    }
}
