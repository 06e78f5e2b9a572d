//! Application module: the UI-side model.
//!
//! `App` holds the scanned library, the tile selection, the current screen
//! and the lazily-filled per-tile metadata cache.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
