//! Small shared types for the playback core.

use std::time::Duration;

/// UI-visible transport state.
///
/// `Hidden` doubles as "stopped": the kiosk hides the transport bar entirely
/// when nothing is loaded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transport {
    Hidden,
    Playing,
    Paused,
}

impl Default for Transport {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Why a session is being torn down. All three reasons converge on the same
/// teardown path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Explicit stop from the UI.
    User,
    /// The engine reported natural end of track.
    Completed,
    /// A new `play` superseded the session.
    Replaced,
}

/// UI-bound progress value, owned by the synchronizer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub position: Duration,
    pub duration: Duration,
    /// While true, polled engine position never overwrites the displayed
    /// value; the display belongs to the user's in-flight gesture.
    pub user_seeking: bool,
}
