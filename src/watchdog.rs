//! Inactivity watchdog: a cancellable one-shot countdown with debounce
//! semantics.
//!
//! Any user interaction resets the deadline; an uninterrupted elapse fires
//! exactly once and returns the watchdog to disarmed. Re-arming is the
//! responsibility of whichever screen becomes foreground next, never the
//! watchdog itself.

use std::time::{Duration, Instant};

pub struct Watchdog {
    timeout: Duration,
    deadline: Option<Instant>,
}

impl Watchdog {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and arm a new one at `now + timeout`.
    /// Called on every interaction event and once at screen entry.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = Some(now + self.timeout);
    }

    /// Disarm without firing. A backgrounded screen never fires a stale
    /// transition upon return.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline elapsed with no intervening
    /// reset; the watchdog is disarmed afterwards.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
