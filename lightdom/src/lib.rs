pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod scroll;

pub use document::{Document, ListenerGuard, ListenerId, Propagation};
pub use element::{Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton, WHEEL_LINE_DELTA};
pub use hit::{contains_point, hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use scroll::{ScrollBox, ScrollContainer};
