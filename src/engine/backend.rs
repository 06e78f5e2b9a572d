//! `rodio`-backed media engine.
//!
//! A `RodioHandle` wraps one decoded file appended to a paused `Sink`.
//! Elapsed time is tracked with a start instant plus the time accumulated
//! before the last pause; seeking rebuilds the sink at the target offset
//! while preserving the paused/playing state.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use lofty::prelude::*;
use lofty::probe::Probe;
use rodio::{OutputStream, OutputStreamBuilder, Sink, StreamError};
use tracing::warn;

use super::sink::create_sink_at;
use super::types::{EngineHandle, MediaEngine, MediaLoadError, ReleaseError};

pub struct RodioEngine {
    stream: Arc<OutputStream>,
}

impl RodioEngine {
    pub fn new() -> Result<Self, StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream: Arc::new(stream),
        })
    }
}

impl MediaEngine for RodioEngine {
    type Handle = RodioHandle;

    fn load(&mut self, path: &Path) -> Result<RodioHandle, MediaLoadError> {
        let sink = create_sink_at(&self.stream, path, Duration::ZERO)?;

        // Queried once per load; decoders rarely know the total duration, the
        // tag properties usually do. Zero means unknown.
        let duration = Probe::open(path)
            .and_then(|p| p.read())
            .map(|tagged| tagged.properties().duration())
            .unwrap_or(Duration::ZERO);

        Ok(RodioHandle {
            stream: self.stream.clone(),
            path: path.to_path_buf(),
            sink,
            duration,
            started_at: None,
            accumulated: Duration::ZERO,
        })
    }
}

pub struct RodioHandle {
    stream: Arc<OutputStream>,
    path: PathBuf,
    sink: Sink,
    duration: Duration,
    // Start time of the current playing stretch plus elapsed time
    // accumulated across earlier stretches.
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl RodioHandle {
    fn clamp(&self, position: Duration) -> Duration {
        if self.duration.is_zero() {
            position
        } else {
            position.min(self.duration)
        }
    }
}

impl EngineHandle for RodioHandle {
    fn start(&mut self) {
        self.sink.play();
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        self.sink.pause();
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    fn seek(&mut self, position: Duration) {
        let position = self.clamp(position);
        self.sink.stop();

        match create_sink_at(&self.stream, &self.path, position) {
            Ok(new_sink) => {
                if self.started_at.is_some() {
                    new_sink.play();
                    self.started_at = Some(Instant::now());
                }
                self.sink = new_sink;
                self.accumulated = position;
            }
            Err(e) => {
                // The old sink is already stopped; the handle will report
                // finished and the controller tears the session down.
                warn!("seek rebuild failed: {e}");
            }
        }
    }

    fn position(&self) -> Duration {
        let elapsed = self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed());
        self.clamp(elapsed)
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn finished(&self) -> bool {
        // A paused sink never drains, so an empty sink while "playing" means
        // the source ran to its natural end.
        self.started_at.is_some() && self.sink.empty()
    }

    fn release(&mut self) -> Result<(), ReleaseError> {
        self.sink.stop();
        self.started_at = None;
        Ok(())
    }
}
