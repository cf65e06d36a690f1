//! Document-wide event target.
//!
//! Widgets that need to see every wheel event (not just the ones delivered to
//! their own subtree) register a listener here. Registration hands back a
//! [`ListenerGuard`]; the listener lives exactly as long as the guard.

use std::sync::{Arc, RwLock, Weak};

use crate::event::Event;

/// What a listener asks the host to do with the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    PreventDefault,
}

/// Listener callback for wheel events.
pub type WheelListener = Box<dyn Fn(&Event) -> Propagation + Send + Sync>;

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct DocumentInner {
    next_id: u64,
    wheel_listeners: Vec<(ListenerId, WheelListener)>,
}

/// Shared document-wide event target. Cheap to clone; clones share listeners.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<RwLock<DocumentInner>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("wheel_listeners", &self.wheel_listener_count())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wheel listener. It is removed when the returned guard drops.
    pub fn add_wheel_listener(
        &self,
        listener: impl Fn(&Event) -> Propagation + Send + Sync + 'static,
    ) -> ListenerGuard {
        let id = match self.inner.write() {
            Ok(mut guard) => {
                let id = ListenerId(guard.next_id);
                guard.next_id += 1;
                guard.wheel_listeners.push((id, Box::new(listener)));
                id
            }
            Err(_) => ListenerId(u64::MAX),
        };
        log::debug!("[document] added wheel listener {:?}", id);

        ListenerGuard {
            id,
            document: Arc::downgrade(&self.inner),
        }
    }

    /// Register a listener that prevents the default action of every wheel event.
    pub fn prevent_wheel_default(&self) -> ListenerGuard {
        self.add_wheel_listener(|_| Propagation::PreventDefault)
    }

    /// Run every wheel listener for `event`.
    /// Returns true if any listener prevented the default action.
    pub fn dispatch_wheel(&self, event: &Event) -> bool {
        let Ok(guard) = self.inner.read() else {
            return false;
        };

        // Every listener runs, even after one has already prevented the default.
        guard
            .wheel_listeners
            .iter()
            .map(|(_, listener)| listener(event))
            .fold(false, |prevented, result| {
                prevented || result == Propagation::PreventDefault
            })
    }

    pub fn wheel_listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.wheel_listeners.len())
            .unwrap_or(0)
    }
}

/// Keeps a document listener registered. Dropping it removes the listener.
///
/// The guard holds a weak reference, so it never keeps a document alive and
/// dropping it after the document is gone is a no-op.
#[derive(Debug)]
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ListenerGuard {
    id: ListenerId,
    document: Weak<RwLock<DocumentInner>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(inner) = self.document.upgrade() else {
            return;
        };
        let result = inner.write();
        if let Ok(mut guard) = result {
            guard.wheel_listeners.retain(|(id, _)| *id != self.id);
            log::debug!("[document] removed wheel listener {:?}", self.id);
        }
    }
}
