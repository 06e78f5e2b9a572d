//! Audio library: directory scanning and best-effort display metadata.
//!
//! The scanner produces bare `Track` descriptors in stable filesystem
//! order; titles and tile descriptions are resolved lazily through
//! `library::read_info` and cached per tile by the UI layer.

mod info;
mod model;
mod scan;

pub use info::{TrackInfo, read_info};
pub use model::Track;
pub use scan::scan;

#[cfg(test)]
mod tests;
