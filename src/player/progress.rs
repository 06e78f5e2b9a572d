//! Progress synchronizer: periodic position polling plus seek-gesture
//! arbitration.
//!
//! The tick registration is the `next_tick` instant; `None` means no tick is
//! scheduled. The controller starts it on `play` and cancels it on every
//! teardown path, always before the engine handle is released.

use std::time::{Duration, Instant};

use crate::engine::EngineHandle;

use super::types::ProgressState;

pub(super) struct Progress {
    state: ProgressState,
    interval: Duration,
    next_tick: Option<Instant>,
}

impl Progress {
    pub(super) fn new(interval: Duration) -> Self {
        Self {
            state: ProgressState::default(),
            interval,
            next_tick: None,
        }
    }

    pub(super) fn state(&self) -> ProgressState {
        self.state
    }

    /// True while a periodic tick is scheduled.
    pub(super) fn scheduled(&self) -> bool {
        self.next_tick.is_some()
    }

    /// (Re)start the polling loop for a fresh session.
    pub(super) fn start(&mut self, duration: Duration, now: Instant) {
        self.state = ProgressState {
            position: Duration::ZERO,
            duration,
            user_seeking: false,
        };
        self.next_tick = Some(now + self.interval);
    }

    /// Cancel the tick registration and reset the displayed value to zero.
    pub(super) fn cancel(&mut self) {
        self.next_tick = None;
        self.state = ProgressState::default();
    }

    /// Run one tick if it is due. While the user is dragging, the tick still
    /// reschedules but skips the outward push.
    pub(super) fn poll<H: EngineHandle>(&mut self, handle: &H, now: Instant) {
        let Some(due) = self.next_tick else {
            return;
        };
        if now < due {
            return;
        }
        self.next_tick = Some(now + self.interval);

        if self.state.user_seeking {
            return;
        }
        self.sync(handle);
    }

    /// Read position/duration from the engine and publish them. An unknown
    /// or non-positive duration reports position zero rather than producing
    /// an invalid span.
    pub(super) fn sync<H: EngineHandle>(&mut self, handle: &H) {
        let duration = handle.duration();
        self.state.duration = duration;
        self.state.position = if duration.is_zero() {
            Duration::ZERO
        } else {
            handle.position().min(duration)
        };
    }

    pub(super) fn begin_seek(&mut self) {
        self.state.user_seeking = true;
    }

    /// The displayed value follows the drag exactly.
    pub(super) fn drag(&mut self, position: Duration) {
        if self.state.user_seeking {
            self.state.position = position;
        }
    }

    /// End the gesture and force one immediate sync so the display does not
    /// lag behind the seek target.
    pub(super) fn end_seek<H: EngineHandle>(&mut self, handle: &H) {
        self.state.user_seeking = false;
        self.sync(handle);
    }
}
