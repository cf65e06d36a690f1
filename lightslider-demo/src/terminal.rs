//! Terminal setup, teardown and diffed output.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::render::{char_width, Canvas};

/// Owns the terminal for the lifetime of the demo. Dropping it restores the
/// terminal, and a panic hook does the same if the demo panics.
pub struct TerminalGuard {
    stdout: Stdout,
    /// Last frame written, for diffing.
    previous: Option<Canvas>,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide, EnableMouseCapture)?;

        Ok(Self {
            stdout,
            previous: None,
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Write the cells of `frame` that differ from the last frame.
    pub fn draw(&mut self, frame: &Canvas) -> io::Result<()> {
        let full = self
            .previous
            .as_ref()
            .is_none_or(|prev| prev.width() != frame.width() || prev.height() != frame.height());
        if full {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut cursor_at: Option<(u16, u16)> = None;
        let mut colors = None;

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let cell = frame.get(x, y);
                if cell.wide_continuation {
                    continue;
                }
                if !full && self.previous.as_ref().and_then(|p| p.try_get(x, y)) == Some(cell) {
                    continue;
                }

                if cursor_at != Some((x, y)) {
                    queue!(self.stdout, cursor::MoveTo(x, y))?;
                }
                if colors != Some(cell.style) {
                    queue!(
                        self.stdout,
                        SetForegroundColor(cell.style.fg),
                        SetBackgroundColor(cell.style.bg)
                    )?;
                    colors = Some(cell.style);
                }
                queue!(self.stdout, Print(cell.ch))?;
                cursor_at = Some((x.saturating_add(char_width(cell.ch) as u16), y));
            }
        }

        self.stdout.flush()?;
        self.previous = Some(frame.clone());
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}
