//! Media engine adapter: a thin facade over the audio playback primitive.
//!
//! The core state machine talks to the engine exclusively through the
//! `MediaEngine` / `EngineHandle` traits so it can be driven by a scripted
//! fake in tests. The production implementation is `RodioEngine`.

mod backend;
mod sink;
mod types;

pub use backend::RodioEngine;
pub use types::*;
