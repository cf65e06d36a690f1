/// Wheel delta reported for one notch of a mouse wheel, in the same unit a
/// browser uses for line-based wheel events.
pub const WHEEL_LINE_DELTA: i16 = 100;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key { key: Key, modifiers: Modifiers },
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse wheel event, deltas in [`WHEEL_LINE_DELTA`] units
    Wheel {
        target: Option<String>,
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Mouse move event (for hover tracking)
    MouseMove { x: u16, y: u16 },
    /// A scroll container's offset changed
    Scroll { target: String },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Pointer position for mouse events.
    pub fn position(&self) -> Option<(u16, u16)> {
        match self {
            Event::Click { x, y, .. } | Event::Wheel { x, y, .. } | Event::MouseMove { x, y } => {
                Some((*x, *y))
            }
            _ => None,
        }
    }

    /// Convert a crossterm event. Mouse targets are left empty; hosts fill
    /// them in with a hit test against their last layout.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                let wheel = |delta_x, delta_y| Event::Wheel {
                    target: None,
                    x,
                    y,
                    delta_x,
                    delta_y,
                };
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::Click {
                        target: None,
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        Some(Event::MouseMove { x, y })
                    }
                    MouseEventKind::ScrollDown => Some(wheel(0, WHEEL_LINE_DELTA)),
                    MouseEventKind::ScrollUp => Some(wheel(0, -WHEEL_LINE_DELTA)),
                    MouseEventKind::ScrollRight => Some(wheel(WHEEL_LINE_DELTA, 0)),
                    MouseEventKind::ScrollLeft => Some(wheel(-WHEEL_LINE_DELTA, 0)),
                    MouseEventKind::Up(_) => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
