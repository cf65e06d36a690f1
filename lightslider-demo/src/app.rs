//! Demo state and event loop.

use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use lightdom::{
    hit_test, Document, Element, Event, Key, LayoutResult, ScrollBox, ScrollContainer,
    WHEEL_LINE_DELTA,
};
use lightslider::{Slider, SliderConfig};
use log::{debug, info, trace};

use crate::card::cards;
use crate::config::DemoError;
use crate::render::{self, Canvas};
use crate::terminal::TerminalGuard;
use crate::theme;

/// How often the list's scroll position is re-reported to the slider.
const TICK: Duration = Duration::from_millis(50);

/// Page rows scrolled per wheel notch the slider lets through.
const PAGE_ROWS_PER_NOTCH: i32 = 3;

/// The demo page: a slider above some page content, scrolled as a whole.
pub struct App {
    document: Document,
    slider: Slider,
    /// Terminal size.
    size: (u16, u16),
    /// First page row shown on screen.
    page_scroll: u16,
    /// Tree and layout of the last frame, for hit testing.
    view: Element,
    layout: LayoutResult,
    quit: bool,
}

impl App {
    pub fn new(config: SliderConfig, slides: usize, size: (u16, u16)) -> Self {
        let document = Document::new();
        let mut slider = Slider::new(document.clone(), config).with_slides(cards(slides));
        slider.mount(ScrollBox::default());

        let mut app = Self {
            document,
            view: slider.view(),
            slider,
            size,
            page_scroll: 0,
            layout: LayoutResult::new(),
            quit: false,
        };
        app.measure();
        app
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn page_scroll(&self) -> u16 {
        self.page_scroll
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Rows of the screen showing the page; the last row is the progress bar.
    fn viewport_rows(&self) -> u16 {
        self.size.1.saturating_sub(1)
    }

    fn max_page_scroll(&self) -> u16 {
        render::page_height().saturating_sub(self.viewport_rows())
    }

    fn page_fraction(&self) -> f64 {
        match self.max_page_scroll() {
            0 => 0.0,
            max => f64::from(self.page_scroll) / f64::from(max),
        }
    }

    /// Push the list's widths for the current terminal size into the scroll
    /// container, recomputing pages when they change.
    fn measure(&mut self) {
        let view = self.slider.view();
        let geometry = render::slider_geometry(&view, render::slider_area(self.size.0));
        let Some(container) = self.slider.container_mut() else {
            return;
        };

        let scroll_width = geometry.scroll_width();
        let client_width = geometry.client_width();
        if container.scroll_width() != scroll_width || container.client_width() != client_width {
            debug!(
                "Slider list measured: scroll width {}, client width {}",
                scroll_width, client_width
            );
            container.set_scroll_width(scroll_width);
            container.set_client_width(client_width);
            self.slider.refresh_pages();
        }
    }

    /// Render the visible part of the page.
    pub fn frame(&mut self) -> Canvas {
        self.measure();

        let mut page = Canvas::new(self.size.0, render::page_height(), theme::page());
        self.layout = render::draw_page(&mut page, &self.slider);
        self.view = self.slider.view();

        let mut screen = page.window(self.page_scroll, self.size.1);
        render::draw_page_progress(&mut screen, self.page_fraction());
        screen
    }

    /// Move a screen row into page coordinates. The progress row maps
    /// outside the page.
    fn page_row(&self, y: u16) -> u16 {
        if y >= self.viewport_rows() {
            u16::MAX
        } else {
            y.saturating_add(self.page_scroll)
        }
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => self.quit = true,
            Event::Key {
                key: Key::Char('c'),
                modifiers,
            } if modifiers.ctrl => self.quit = true,
            Event::Resize { width, height } => {
                self.size = (width, height);
                self.page_scroll = self.page_scroll.min(self.max_page_scroll());
                self.measure();
                self.slider.handle_event(&event, &self.layout);
            }
            Event::MouseMove { x, y } => {
                let event = Event::MouseMove {
                    x,
                    y: self.page_row(y),
                };
                self.slider.handle_event(&event, &self.layout);
            }
            Event::Click { x, y, button, .. } => {
                let y = self.page_row(y);
                let target = hit_test(&self.layout, &self.view, x, y);
                trace!("Click at ({}, {}) on {:?}", x, y, target);
                let event = Event::Click { target, x, y, button };
                self.slider.handle_event(&event, &self.layout);
            }
            Event::Wheel {
                x,
                y,
                delta_x,
                delta_y,
                ..
            } => {
                let event = Event::Wheel {
                    target: None,
                    x,
                    y: self.page_row(y),
                    delta_x,
                    delta_y,
                };
                self.slider.handle_event(&event, &self.layout);
                if !self.document.dispatch_wheel(&event) {
                    self.scroll_page(delta_y);
                }
            }
            _ => {}
        }
    }

    /// Re-report the list's scroll position so the current dot settles after
    /// a throttled burst.
    pub fn tick(&mut self) {
        let event = Event::Scroll {
            target: self.slider.list_id(),
        };
        self.slider.handle_event(&event, &self.layout);
    }

    fn scroll_page(&mut self, delta_y: i16) {
        let rows = i32::from(delta_y) * PAGE_ROWS_PER_NOTCH / i32::from(WHEEL_LINE_DELTA);
        let target = (i32::from(self.page_scroll) + rows).clamp(0, i32::from(self.max_page_scroll()));
        let target = u16::try_from(target).unwrap_or(0);
        if target != self.page_scroll {
            trace!("Page scroll {} -> {}", self.page_scroll, target);
            self.page_scroll = target;
        }
    }
}

/// Run the demo until the user quits.
pub async fn run(mut app: App, terminal: &mut TerminalGuard) -> Result<(), DemoError> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    info!(
        "Demo started with {} slides, {} pages",
        app.slider().slide_count(),
        app.slider().page_count()
    );
    terminal.draw(&app.frame())?;

    while !app.should_quit() {
        tokio::select! {
            Some(event) = events.next() => {
                let event = event?;
                trace!("Crossterm event: {:?}", event);
                if let Some(event) = Event::from_crossterm(event) {
                    app.handle(event);
                }
            }
            _ = tick.tick() => app.tick(),
        }
        terminal.draw(&app.frame())?;
    }

    info!("Demo exiting");
    Ok(())
}
