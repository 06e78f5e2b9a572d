use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// A source could not be opened, decoded or started.
///
/// Carries the identity of the offending file so the UI can name it in the
/// notice line. Never fatal to the process.
#[derive(Debug, Error)]
#[error("cannot load {}: {reason}", path.display())]
pub struct MediaLoadError {
    pub path: PathBuf,
    pub reason: String,
}

impl MediaLoadError {
    pub fn new(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Releasing an engine handle failed.
///
/// Teardown paths log this and carry on; a failed release never prevents the
/// session from being considered torn down.
#[derive(Debug, Error)]
#[error("engine release failed: {0}")]
pub struct ReleaseError(pub String);

/// One loaded, playable media instance.
pub trait EngineHandle {
    /// Start or resume playback.
    fn start(&mut self);
    /// Pause playback; position stops advancing.
    fn pause(&mut self);
    /// Jump to `position`. Preserves the paused/playing state.
    fn seek(&mut self, position: Duration);
    /// Current playback position.
    fn position(&self) -> Duration;
    /// Total duration, `Duration::ZERO` when unknown (malformed files).
    fn duration(&self) -> Duration;
    /// True once playback has run to its natural end.
    fn finished(&self) -> bool;
    /// Stop playback and free the underlying resource.
    fn release(&mut self) -> Result<(), ReleaseError>;
}

/// Factory for engine handles. One handle per loaded source.
pub trait MediaEngine {
    type Handle: EngineHandle;

    fn load(&mut self, path: &Path) -> Result<Self::Handle, MediaLoadError>;
}
