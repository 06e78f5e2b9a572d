//! Playback core: the single-session controller and its progress
//! synchronizer.
//!
//! `Player` owns the active session (track + engine handle) and mediates
//! every engine interaction; `progress` keeps the UI-bound position value in
//! step with the engine while arbitrating with in-flight seek gestures.

mod controller;
mod progress;
mod types;

pub use controller::Player;
pub use types::*;
