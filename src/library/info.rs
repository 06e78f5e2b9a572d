//! Best-effort display metadata for a track.
//!
//! Pure, synchronous lookup with no retry: a sidecar `.txt` file next to
//! the audio file wins, then embedded tags, then filename-derived
//! defaults. Failures never surface; a tile always has something to show.

use std::fs;
use std::path::PathBuf;

use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::ItemKey;

use super::model::Track;

const NOT_LISTED: &str = "<not listed>";

/// Display strings for one tile.
#[derive(Clone, Debug)]
pub struct TrackInfo {
    pub title: String,
    pub description: String,
}

/// Resolve title and description for `track`.
pub fn read_info(track: &Track) -> TrackInfo {
    let tags = read_tags(track);

    let title = tags
        .as_ref()
        .and_then(|t| t.title.clone())
        .unwrap_or_else(|| track.file_stem.clone());

    let description = sidecar_description(track).unwrap_or_else(|| {
        let tags = tags.unwrap_or_default();
        format!(
            "Composer: {}\nPerformers: {}\nYear: {}",
            tags.composer.as_deref().unwrap_or(NOT_LISTED),
            tags.performers.as_deref().unwrap_or(NOT_LISTED),
            tags.year
                .map(|y| y.to_string())
                .unwrap_or_else(|| NOT_LISTED.to_string()),
        )
    });

    TrackInfo { title, description }
}

#[derive(Default)]
struct Tags {
    title: Option<String>,
    composer: Option<String>,
    performers: Option<String>,
    year: Option<u32>,
}

fn non_empty(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

fn read_tags(track: &Track) -> Option<Tags> {
    let tagged = Probe::open(&track.path).and_then(|p| p.read()).ok()?;
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;

    Some(Tags {
        title: non_empty(tag.title().as_deref()),
        composer: non_empty(
            tag.get(&ItemKey::Composer)
                .and_then(|item| item.value().text()),
        ),
        performers: non_empty(tag.artist().as_deref()),
        year: tag.year(),
    })
}

fn sidecar_path(track: &Track) -> PathBuf {
    track.path.with_extension("txt")
}

/// The free-text companion file, when present and non-empty.
fn sidecar_description(track: &Track) -> Option<String> {
    let text = fs::read_to_string(sidecar_path(track)).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
