//! Leading-edge throttling.

use std::time::Duration;

use tokio::time::Instant;

/// Leading-edge rate limiter.
///
/// The first call in a burst passes immediately and starts a cooldown; every
/// call made before the cooldown elapses is dropped, never queued or replayed.
/// There is no trailing call, so the last event of a burst may be lost.
///
/// Time is read from [`tokio::time::Instant`], which follows a paused tokio
/// clock in tests.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use lightslider::Throttle;
///
/// let mut throttle = Throttle::new(Duration::from_millis(100));
/// assert!(throttle.ready());
/// assert!(!throttle.ready());
/// ```
#[derive(Debug, Clone)]
pub struct Throttle {
    cooldown: Duration,
    /// End of the running cooldown, if any.
    blocked_until: Option<Instant>,
}

impl Throttle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            blocked_until: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Returns true if a call may pass now, and starts the cooldown if so.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        if self.blocked_until.is_some_and(|until| now < until) {
            return false;
        }
        self.blocked_until = Some(now + self.cooldown);
        true
    }

    /// Whether a call made now would be dropped.
    pub fn is_blocked(&self) -> bool {
        self.blocked_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// End the running cooldown early.
    pub fn reset(&mut self) {
        self.blocked_until = None;
    }

    /// Wrap `f` so calls to it are throttled by this cooldown.
    pub fn wrap<F>(self, f: F) -> Throttled<F> {
        Throttled { throttle: self, f }
    }
}

/// A callback gated by a [`Throttle`].
///
/// Multiple arguments are passed as a tuple.
#[derive(Debug, Clone)]
pub struct Throttled<F> {
    throttle: Throttle,
    f: F,
}

impl<F> Throttled<F> {
    /// Call the wrapped function unless the cooldown is running.
    /// Returns `None` when the call was dropped.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.throttle.ready() {
            Some((self.f)(args))
        } else {
            None
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.throttle.is_blocked()
    }
}
