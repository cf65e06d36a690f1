//! Drawing the demo page.
//!
//! The page is drawn into a canvas as tall as its content; the terminal shows
//! a window of it starting at the page scroll offset. Rects recorded in the
//! [`LayoutResult`] are in page coordinates, so pointer rows are shifted by
//! the page scroll before hit testing.

use lightdom::{Element, LayoutResult, Rect, ScrollContainer};
use lightslider::Slider;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{self, Style};

/// Rows above the slider.
pub const HEADER_ROWS: u16 = 3;
/// Rows taken by the slider, dots included.
pub const SLIDER_ROWS: u16 = 12;
/// Rows of page content below the slider.
pub const FILLER_ROWS: u16 = 40;

/// Width of a slide when the list carries no column hint.
const DEFAULT_SLIDE_WIDTH: u16 = 24;
const ARROW_WIDTH: u16 = 3;
const DOT_ROWS: u16 = 2;

// =============================================================================
// Canvas
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
    /// Second column of a wide character; the terminal skips it.
    pub wide_continuation: bool,
}

impl Cell {
    pub const fn new(ch: char, style: Style) -> Self {
        Self {
            ch,
            style,
            wide_continuation: false,
        }
    }

    const fn continuation(style: Style) -> Self {
        Self {
            ch: ' ',
            style,
            wide_continuation: true,
        }
    }
}

/// Terminal columns taken by `ch`.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Grid of styled characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, style: Style) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::new(' ', style); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn try_get(&self, x: u16, y: u16) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Cell at `(x, y)`, blank when out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Cell {
        self.try_get(x, y).unwrap_or(Cell::new(' ', theme::page()))
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.put(x, y, Cell::new(ch, style));
    }

    fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    /// Put `ch` at `(x, y)`, marking the following column when it is wide.
    /// A wide character that would be cut by the right edge becomes a space.
    pub fn set_glyph(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if char_width(ch) == 2 {
            if x.saturating_add(1) >= self.width {
                self.set(x, y, ' ', style);
                return;
            }
            self.set(x, y, ch, style);
            self.put(x + 1, y, Cell::continuation(style));
        } else {
            self.set(x, y, ch, style);
        }
    }

    pub fn fill(&mut self, rect: Rect, ch: char, style: Style) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, ch, style);
            }
        }
    }

    /// Write `text` from `(x, y)`, clipped to the canvas. Wide characters
    /// take two columns and zero-width ones are dropped.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        let mut column = x;
        for ch in text.chars() {
            let width = char_width(ch);
            if width == 0 {
                continue;
            }
            if column >= self.width {
                break;
            }
            self.set_glyph(column, y, ch, style);
            column = column.saturating_add(width as u16);
        }
    }

    /// Rows `top..top + height` as a new canvas.
    pub fn window(&self, top: u16, height: u16) -> Canvas {
        let mut window = Canvas::new(self.width, height, theme::page());
        for y in 0..height {
            for x in 0..self.width {
                window.cells[y as usize * self.width as usize + x as usize] =
                    self.get(x, top.saturating_add(y));
            }
        }
        window
    }
}

// =============================================================================
// Slider geometry
// =============================================================================

/// Where the parts of a slider land inside its area.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderGeometry {
    pub wrapper: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub list: Rect,
    /// Row of the progress marker, when rendered.
    pub progress: Option<Rect>,
    /// Row of the native scrollbar, when not hidden.
    pub scrollbar: Option<Rect>,
    /// Rows the slides are drawn in.
    pub slides: Rect,
    pub slide_width: u16,
    pub slide_count: usize,
    pub dots: Vec<Rect>,
}

impl SliderGeometry {
    /// Content width of the list, for the scroll container.
    pub fn scroll_width(&self) -> f64 {
        f64::from(self.slide_width) * self.slide_count as f64
    }

    pub fn client_width(&self) -> f64 {
        f64::from(self.list.width)
    }
}

/// Lay out a slider's element tree inside `area`, keyed off class names.
pub fn slider_geometry(view: &Element, area: Rect) -> SliderGeometry {
    let children = view.child_elements();
    let has_dots = children.iter().any(|c| c.has_class("dot-wrapper"));
    let has_left = children.iter().any(|c| c.has_class("arrow") && c.has_class("left"));
    let has_right = children.iter().any(|c| c.has_class("arrow") && c.has_class("right"));

    let (body, dot_area) = if has_dots {
        area.split_top(area.height.saturating_sub(DOT_ROWS))
    } else {
        (area, Rect::new(area.x, area.bottom(), area.width, 0))
    };

    let (prev, body) = if has_left {
        let (prev, rest) = body.split_left(ARROW_WIDTH);
        (Some(prev), rest)
    } else {
        (None, body)
    };
    let (list, next) = if has_right {
        let (rest, next) = body.split_right(ARROW_WIDTH);
        (rest, Some(next))
    } else {
        (body, None)
    };

    let list_element = children.iter().find(|c| c.has_class("light_slider"));
    let list_items = list_element.map(Element::child_elements).unwrap_or(&[]);
    let has_progress = list_items.iter().any(|c| c.has_class("progress"));
    let slide_count = list_items.iter().filter(|c| !c.has_class("progress")).count();
    let hide_scroll = list_element.is_some_and(|l| l.has_class("hide-scroll"));

    let mut slides = list;
    let progress = has_progress.then(|| {
        let (row, rest) = slides.split_top(1);
        slides = rest;
        row
    });
    let scrollbar = (!hide_scroll).then(|| {
        let (rest, row) = (
            Rect::new(slides.x, slides.y, slides.width, slides.height.saturating_sub(1)),
            Rect::new(slides.x, slides.bottom().saturating_sub(1), slides.width, 1),
        );
        slides = rest;
        row
    });

    let slide_width = list_element
        .and_then(|l| l.style_value("grid-auto-columns"))
        .and_then(parse_percent)
        .map(|pct| (f64::from(list.width) * pct / 100.0).round() as u16)
        .unwrap_or(DEFAULT_SLIDE_WIDTH)
        .max(1);

    let dot_count = children
        .iter()
        .find(|c| c.has_class("dot-wrapper"))
        .map(|w| w.child_elements().len())
        .unwrap_or(0);
    let dots = dot_rects(dot_area, dot_count);

    SliderGeometry {
        wrapper: area,
        prev,
        next,
        list,
        progress,
        scrollbar,
        slides,
        slide_width,
        slide_count,
        dots,
    }
}

fn parse_percent(value: &str) -> Option<f64> {
    value.trim().strip_suffix('%')?.trim().parse().ok()
}

/// One cell per dot, centered on the last row of `area`, a space apart.
/// Dots past the width of `area` are not laid out.
fn dot_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.is_empty() {
        return Vec::new();
    }
    let row = area.bottom() - 1;
    let width = usize::from(area.width);
    let shown = count.min(width.div_ceil(2));
    let span = shown * 2 - 1;
    let start = usize::from(area.x) + (width - span) / 2;
    (0..shown)
        .filter_map(|i| u16::try_from(start + i * 2).ok())
        .map(|x| Rect::new(x, row, 1, 1))
        .collect()
}

// =============================================================================
// Drawing
// =============================================================================

/// Total rows of page content for a terminal of any size.
pub const fn page_height() -> u16 {
    HEADER_ROWS + SLIDER_ROWS + 1 + FILLER_ROWS
}

/// Area the slider occupies on a page `width` columns wide.
pub fn slider_area(width: u16) -> Rect {
    Rect::new(0, HEADER_ROWS, width, SLIDER_ROWS)
}

/// Draw the whole page and return the layout used for hit testing.
pub fn draw_page(canvas: &mut Canvas, slider: &Slider) -> LayoutResult {
    let mut layout = LayoutResult::new();
    let width = canvas.width();

    canvas.print(1, 0, "lightslider demo", theme::page());
    canvas.print(
        1,
        1,
        "hover the cards and use the wheel, click arrows or dots, q to quit",
        theme::muted(),
    );

    let view = slider.view();
    let geometry = slider_geometry(&view, slider_area(width));
    draw_slider(canvas, slider, &view, &geometry, &mut layout);

    let filler_top = HEADER_ROWS + SLIDER_ROWS + 1;
    for row in 0..FILLER_ROWS {
        let text = format!("page content {:>2}  {}", row + 1, "· ".repeat(12));
        canvas.print(1, filler_top + row, &text, theme::muted());
    }

    layout
}

fn draw_slider(
    canvas: &mut Canvas,
    slider: &Slider,
    view: &Element,
    geometry: &SliderGeometry,
    layout: &mut LayoutResult,
) {
    layout.insert(view.id.clone(), geometry.wrapper);
    canvas.fill(geometry.wrapper, ' ', theme::style_for(&view.classes));

    for child in view.child_elements() {
        let style = theme::style_for(&child.classes);
        if child.has_class("arrow") {
            let rect = if child.has_class("left") {
                geometry.prev
            } else {
                geometry.next
            };
            let Some(rect) = rect else { continue };
            layout.insert(child.id.clone(), rect);
            canvas.fill(rect, ' ', style);
            let label = child
                .child_elements()
                .iter()
                .find_map(Element::text_content)
                .unwrap_or_default();
            let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
            let indent = rect.width.saturating_sub(label_width) / 2;
            canvas.print(rect.x + indent, rect.y + rect.height / 2, label, style);
        } else if child.has_class("light_slider") {
            layout.insert(child.id.clone(), geometry.list);
            draw_list(canvas, slider, child, geometry);
        } else if child.has_class("dot-wrapper") {
            for (dot, rect) in child.child_elements().iter().zip(&geometry.dots) {
                layout.insert(dot.id.clone(), *rect);
                let ch = if dot.has_class("current") { '●' } else { '○' };
                canvas.set(rect.x, rect.y, ch, theme::style_for(&dot.classes));
            }
        }
    }
}

fn draw_list(canvas: &mut Canvas, slider: &Slider, list: &Element, geometry: &SliderGeometry) {
    let (scroll_left, fraction) = slider
        .container()
        .map(|c| (c.scroll_left(), c.scroll_fraction()))
        .unwrap_or((0.0, 0.0));
    let list_style = theme::style_for(&list.classes);
    canvas.fill(geometry.list, ' ', list_style);

    let slides: Vec<&Element> = list
        .child_elements()
        .iter()
        .filter(|c| !c.has_class("progress"))
        .collect();

    let area = geometry.slides;
    let offset = scroll_left.round().max(0.0) as usize;
    let slide_width = geometry.slide_width as usize;
    let label_row = area.y + area.height / 2;

    for column in 0..area.width {
        let content_x = offset + column as usize;
        let index = content_x / slide_width;
        let Some(slide) = slides.get(index) else {
            continue;
        };
        let local = content_x % slide_width;
        // One column of gap on either side of every card.
        if local == 0 || local + 1 == slide_width {
            continue;
        }

        let tone = slide
            .data
            .get("tone")
            .and_then(|t| t.parse().ok())
            .unwrap_or(index);
        let style = theme::card_style(tone);
        let x = area.x + column;
        for y in area.y..area.bottom() {
            canvas.set(x, y, ' ', style);
        }

        let label = slide
            .child_elements()
            .iter()
            .find_map(Element::text_content)
            .unwrap_or_default();
        let label_start = slide_width.saturating_sub(label.width()) / 2;
        match local.checked_sub(label_start).and_then(|i| glyph_at(label, i)) {
            Some(Glyph::Start(ch)) if char_width(ch) < 2 || column + 1 < area.width => {
                canvas.set_glyph(x, label_row, ch, style);
            }
            // The other half of a wide character is outside the list.
            Some(Glyph::Start(_)) => {}
            Some(Glyph::Continuation) if column > 0 => {
                canvas.put(x, label_row, Cell::continuation(style));
            }
            Some(Glyph::Continuation) | None => {}
        }
    }

    if let Some(row) = geometry.progress {
        draw_bar(canvas, row, fraction, theme::progress(), theme::scrollbar());
    }
    if let Some(row) = geometry.scrollbar {
        draw_bar(canvas, row, fraction, theme::scrollbar(), theme::scrollbar());
    }
}

enum Glyph {
    Start(char),
    Continuation,
}

/// What `text` shows at display column `column`.
fn glyph_at(text: &str, column: usize) -> Option<Glyph> {
    let mut start = 0;
    for ch in text.chars() {
        let width = char_width(ch);
        if width == 0 {
            continue;
        }
        if column == start {
            return Some(Glyph::Start(ch));
        }
        if column < start + width {
            return Some(Glyph::Continuation);
        }
        start += width;
    }
    None
}

/// Horizontal bar filled to `fraction` of `row`.
fn draw_bar(canvas: &mut Canvas, row: Rect, fraction: f64, filled: Style, empty: Style) {
    let filled_width = (f64::from(row.width) * fraction.clamp(0.0, 1.0)).round() as u16;
    for x in 0..row.width {
        if x < filled_width {
            canvas.set(row.x + x, row.y, '━', filled);
        } else {
            canvas.set(row.x + x, row.y, '─', empty);
        }
    }
}

/// Page scroll progress along the bottom row of the screen.
pub fn draw_page_progress(screen: &mut Canvas, fraction: f64) {
    let row = Rect::new(0, screen.height().saturating_sub(1), screen.width(), 1);
    draw_bar(screen, row, fraction, theme::progress(), theme::muted());
}

#[cfg(test)]
mod tests {
    use lightdom::{Document, ScrollBox};
    use lightslider::SliderConfig;

    use super::*;
    use crate::card::cards;

    fn slider(config: SliderConfig, slides: usize) -> Slider {
        let mut slider = Slider::new(Document::new(), config).with_slides(cards(slides));
        slider.mount(ScrollBox::default());
        slider
    }

    #[test]
    fn test_geometry_without_features() {
        let slider = slider(SliderConfig::new(), 3);
        let geometry = slider_geometry(&slider.view(), Rect::new(0, 3, 60, 12));

        assert_eq!(geometry.prev, None);
        assert_eq!(geometry.next, None);
        assert_eq!(geometry.list, Rect::new(0, 3, 60, 12));
        assert_eq!(geometry.progress, None);
        // Native scrollbar takes the last list row
        assert_eq!(geometry.scrollbar, Some(Rect::new(0, 14, 60, 1)));
        assert_eq!(geometry.slides, Rect::new(0, 3, 60, 11));
        assert_eq!(geometry.slide_width, DEFAULT_SLIDE_WIDTH);
        assert_eq!(geometry.scroll_width(), 72.0);
        assert!(geometry.dots.is_empty());
    }

    #[test]
    fn test_geometry_with_all_features() {
        let config = SliderConfig::new()
            .buttons(true)
            .progress(true)
            .hide_scroll(true)
            .dots(true)
            .per_page(2);
        let mut slider = slider(config, 4);
        if let Some(container) = slider.container_mut() {
            container.set_scroll_width(148.0);
            container.set_client_width(74.0);
        }
        slider.refresh_pages();

        let geometry = slider_geometry(&slider.view(), Rect::new(0, 3, 80, 12));

        assert_eq!(geometry.prev, Some(Rect::new(0, 3, 3, 10)));
        assert_eq!(geometry.next, Some(Rect::new(77, 3, 3, 10)));
        assert_eq!(geometry.list, Rect::new(3, 3, 74, 10));
        assert_eq!(geometry.progress, Some(Rect::new(3, 3, 74, 1)));
        assert_eq!(geometry.scrollbar, None);
        assert_eq!(geometry.slides, Rect::new(3, 4, 74, 9));
        assert_eq!(geometry.slide_width, 37);
        assert_eq!(geometry.slide_count, 4);
        assert_eq!(
            geometry.dots,
            vec![Rect::new(38, 14, 1, 1), Rect::new(40, 14, 1, 1)]
        );
    }

    #[test]
    fn test_draw_page_records_slider_rects() {
        let slider = slider(SliderConfig::new().buttons(true), 2);
        let mut canvas = Canvas::new(40, page_height(), theme::page());
        let layout = draw_page(&mut canvas, &slider);

        assert_eq!(layout.get(&slider.wrapper_id()), Some(slider_area(40)));
        assert_eq!(layout.get(&slider.prev_id()), Some(Rect::new(0, 3, 3, 12)));
        assert_eq!(canvas.get(1, 3 + 6).ch, '<');
        assert_eq!(canvas.get(38, 3 + 6).ch, '>');
    }

    #[test]
    fn test_print_advances_by_display_width() {
        let mut canvas = Canvas::new(8, 1, theme::page());
        canvas.print(0, 0, "日本x", theme::page());

        assert_eq!(canvas.get(0, 0).ch, '日');
        assert!(canvas.get(1, 0).wide_continuation);
        assert_eq!(canvas.get(2, 0).ch, '本');
        assert!(canvas.get(3, 0).wide_continuation);
        assert_eq!(canvas.get(4, 0).ch, 'x');
        assert!(!canvas.get(4, 0).wide_continuation);
    }

    #[test]
    fn test_print_blanks_wide_char_cut_by_edge() {
        let mut canvas = Canvas::new(3, 1, theme::page());
        canvas.print(0, 0, "ab日", theme::page());

        assert_eq!(canvas.get(1, 0).ch, 'b');
        assert_eq!(canvas.get(2, 0).ch, ' ');
        assert!(!canvas.get(2, 0).wide_continuation);
    }

    #[test]
    fn test_wide_arrow_label_is_centered() {
        let slider = slider(SliderConfig::new().buttons(true).left_arrow("左"), 2);
        let mut canvas = Canvas::new(40, page_height(), theme::page());
        draw_page(&mut canvas, &slider);

        // Two columns wide in a three column arrow
        assert_eq!(canvas.get(0, 3 + 6).ch, '左');
        assert!(canvas.get(1, 3 + 6).wide_continuation);
        assert_eq!(canvas.get(2, 3 + 6).ch, ' ');
    }

    #[test]
    fn test_wide_slide_label_is_centered() {
        let slide = Element::li().child(Element::text("日本語"));
        let mut slider = Slider::new(Document::new(), SliderConfig::new()).with_slides(vec![slide]);
        slider.mount(ScrollBox::default());
        let mut canvas = Canvas::new(40, page_height(), theme::page());
        draw_page(&mut canvas, &slider);

        // Six columns centered in a 24 column slide; slides span rows 3..14
        let row = 3 + 11 / 2;
        assert_eq!(canvas.get(9, row).ch, '日');
        assert!(canvas.get(10, row).wide_continuation);
        assert_eq!(canvas.get(11, row).ch, '本');
        assert_eq!(canvas.get(13, row).ch, '語');
        assert!(canvas.get(14, row).wide_continuation);
        assert_eq!(canvas.get(15, row).ch, ' ');
    }

    #[test]
    fn test_dots_beyond_width_are_not_laid_out() {
        let dots = dot_rects(Rect::new(0, 0, 80, 2), 40000);

        assert_eq!(dots.len(), 40);
        assert_eq!(dots.first(), Some(&Rect::new(0, 1, 1, 1)));
        assert_eq!(dots.last(), Some(&Rect::new(78, 1, 1, 1)));
    }

    #[test]
    fn test_geometry_with_many_pages() {
        let mut slider = slider(SliderConfig::new().dots(true).per_page(1), 300);
        if let Some(container) = slider.container_mut() {
            container.set_scroll_width(80.0 * 300.0);
            container.set_client_width(80.0);
        }
        slider.refresh_pages();
        assert_eq!(slider.page_count(), 300);

        let geometry = slider_geometry(&slider.view(), Rect::new(0, 3, 80, 12));
        assert_eq!(geometry.dots.len(), 40);
        assert!(geometry.dots.iter().all(|dot| dot.right() <= 80));
    }

    #[test]
    fn test_window_clips_rows() {
        let mut canvas = Canvas::new(4, 10, theme::page());
        canvas.print(0, 5, "ab", theme::page());

        let window = canvas.window(5, 3);
        assert_eq!(window.height(), 3);
        assert_eq!(window.get(0, 0).ch, 'a');
        assert_eq!(window.get(1, 0).ch, 'b');

        let past_end = canvas.window(9, 3);
        assert_eq!(past_end.get(0, 2).ch, ' ');
    }
}
