//! Playback controller: owns the single active-track session.
//!
//! All engine teardown flows through `stop`, whatever the trigger: an
//! explicit stop, natural completion, or a superseding `play`. That keeps
//! one transition function and one final state. Ordering discipline: the
//! progress tick registration is cancelled before the engine handle is
//! released, and a prior session is fully torn down before a new handle is
//! created.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::engine::{EngineHandle, MediaEngine, MediaLoadError};
use crate::library::Track;

use super::progress::Progress;
use super::types::{ProgressState, StopReason, Transport};

struct Session<H> {
    track: Track,
    handle: H,
    paused: bool,
    duration: Duration,
}

pub struct Player<E: MediaEngine> {
    engine: E,
    session: Option<Session<E::Handle>>,
    progress: Progress,
}

impl<E: MediaEngine> Player<E> {
    pub fn new(engine: E, tick_interval: Duration) -> Self {
        Self {
            engine,
            session: None,
            progress: Progress::new(tick_interval),
        }
    }

    /// Load and start `track`, tearing down any active session first. The
    /// engine is never asked to hold two sources at once: the previous
    /// handle is released before the new one is created.
    pub fn play(&mut self, track: Track, now: Instant) -> Result<(), MediaLoadError> {
        if self.session.is_some() {
            self.stop(StopReason::Replaced);
        }

        let mut handle = self.engine.load(&track.path)?;
        let duration = handle.duration();
        handle.start();

        debug!("playing {}", track.path.display());
        self.session = Some(Session {
            track,
            handle,
            paused: false,
            duration,
        });
        self.progress.start(duration, now);
        Ok(())
    }

    /// Flip pause/resume. No-op without a session; idempotent per state.
    pub fn toggle_pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.paused {
            session.handle.start();
        } else {
            session.handle.pause();
        }
        session.paused = !session.paused;
    }

    /// Seek to zero and make sure playback is running. Always ends in the
    /// playing state at position zero. No-op without a session.
    pub fn restart(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.handle.seek(Duration::ZERO);
        if session.paused {
            session.handle.start();
            session.paused = false;
        }
        self.progress.sync(&session.handle);
    }

    /// Tear down the active session. Tolerates defensive calls with no
    /// session. The tick registration is cancelled before the handle is
    /// released so no tick can observe a released handle; a release error is
    /// logged and the session is considered torn down regardless.
    pub fn stop(&mut self, reason: StopReason) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        self.progress.cancel();
        if let Err(e) = session.handle.release() {
            warn!("release after {reason:?} stop: {e}");
        }
        debug!("stopped ({reason:?}) {}", session.track.path.display());
    }

    /// One cooperative turn: route natural completion into the stop path,
    /// then run the progress tick if due.
    pub fn poll(&mut self, now: Instant) {
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.handle.finished())
        {
            self.stop(StopReason::Completed);
            return;
        }
        if let Some(session) = self.session.as_ref() {
            self.progress.poll(&session.handle, now);
        }
    }

    /// The user grabbed the progress control. No engine interaction yet.
    pub fn on_seek_start(&mut self) {
        if self.session.is_some() {
            self.progress.begin_seek();
        }
    }

    /// The drag moved. The displayed value follows the finger; with
    /// `live_scrub` the engine chases it for audible feedback.
    pub fn on_seek_drag(&mut self, position: Duration, live_scrub: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.progress.drag(position);
        if live_scrub {
            session.handle.seek(position);
        }
    }

    /// The drag ended: commit the seek. A session that was playing before
    /// the gesture resumes playing; a paused one stays paused.
    pub fn on_seek_end(&mut self, position: Duration) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.handle.seek(position);
        if !session.paused {
            session.handle.start();
        }
        self.progress.end_seek(&session.handle);
    }

    /// Keyboard scrub: one-shot relative seek through the gesture path.
    pub fn seek_by(&mut self, delta_secs: i64) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let current = session.handle.position();
        let target = if delta_secs.is_negative() {
            current.saturating_sub(Duration::from_secs(delta_secs.unsigned_abs()))
        } else {
            current + Duration::from_secs(delta_secs.unsigned_abs())
        };
        self.on_seek_start();
        self.on_seek_end(target);
    }

    pub fn transport(&self) -> Transport {
        match &self.session {
            None => Transport::Hidden,
            Some(s) if s.paused => Transport::Paused,
            Some(_) => Transport::Playing,
        }
    }

    pub fn progress(&self) -> ProgressState {
        self.progress.state()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.session.as_ref().map(|s| &s.track)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.session.as_ref().map_or(Duration::ZERO, |s| s.duration)
    }

    #[cfg(test)]
    pub(super) fn tick_scheduled(&self) -> bool {
        self.progress.scheduled()
    }
}
