//! Terminal colors keyed by class name.
//!
//! This is the demo's stylesheet: the slider only emits structure and class
//! names, everything visual is decided here.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

const BACKGROUND: Color = Color::Rgb { r: 24, g: 24, b: 32 };
const SURFACE: Color = Color::Rgb { r: 36, g: 36, b: 48 };
const TEXT: Color = Color::Rgb {
    r: 220,
    g: 220,
    b: 230,
};
const MUTED: Color = Color::Rgb {
    r: 110,
    g: 110,
    b: 130,
};
const ACCENT: Color = Color::Rgb {
    r: 250,
    g: 180,
    b: 60,
};

const CARD_TONES: [Color; 6] = [
    Color::Rgb { r: 70, g: 90, b: 160 },
    Color::Rgb { r: 60, g: 130, b: 110 },
    Color::Rgb { r: 150, g: 80, b: 120 },
    Color::Rgb { r: 140, g: 110, b: 50 },
    Color::Rgb { r: 90, g: 70, b: 150 },
    Color::Rgb { r: 50, g: 120, b: 150 },
];

/// Style for an element carrying `classes`. The most specific class wins.
pub fn style_for(classes: &[String]) -> Style {
    let has = |class: &str| classes.iter().any(|c| c == class);

    if has("page-dot") {
        if has("current") {
            return Style::new(ACCENT, BACKGROUND);
        }
        return Style::new(MUTED, BACKGROUND);
    }
    if has("arrow") {
        return Style::new(ACCENT, SURFACE);
    }
    if has("progress") {
        return Style::new(ACCENT, SURFACE);
    }
    if has("light_slider") {
        return Style::new(TEXT, SURFACE);
    }
    Style::new(TEXT, BACKGROUND)
}

/// Background of a card, picked by its tone slot.
pub fn card_style(tone: usize) -> Style {
    Style::new(TEXT, CARD_TONES[tone % CARD_TONES.len()])
}

pub fn page() -> Style {
    Style::new(TEXT, BACKGROUND)
}

pub fn muted() -> Style {
    Style::new(MUTED, BACKGROUND)
}

pub fn progress() -> Style {
    Style::new(ACCENT, SURFACE)
}

pub fn scrollbar() -> Style {
    Style::new(MUTED, SURFACE)
}
