//! Application model types: `App` and `Screen`.

use crate::library::{Track, TrackInfo, read_info};

/// Which screen is in the foreground.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The tile grid with the transport bar.
    Library,
    /// The passive idle/info screen.
    Idle,
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    pub selected: usize,
    pub screen: Screen,
    /// Tile index of the track currently loaded in the player, if any.
    pub playing_index: Option<usize>,
    /// Transient notice line, e.g. a failed selection.
    pub notice: Option<String>,
    pub library_dir: Option<String>,

    // Per-tile metadata cache, filled on first render of each tile.
    infos: Vec<Option<TrackInfo>>,
}

impl App {
    pub fn new(tracks: Vec<Track>) -> Self {
        let infos = vec![None; tracks.len()];
        Self {
            tracks,
            selected: 0,
            screen: Screen::Library,
            playing_index: None,
            notice: None,
            library_dir: None,
            infos,
        }
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Title and description for a tile, resolved on first use and cached.
    pub fn track_info(&mut self, index: usize) -> &TrackInfo {
        if self.infos[index].is_none() {
            self.infos[index] = Some(read_info(&self.tracks[index]));
        }
        self.infos[index].as_ref().unwrap()
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.selected = index;
        }
    }

    /// Grid movement. `columns` is the tile-grid width.
    pub fn move_left(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < self.tracks.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        if columns > 0 && self.selected >= columns {
            self.selected -= columns;
        }
    }

    pub fn move_down(&mut self, columns: usize) {
        if columns > 0 && self.selected + columns < self.tracks.len() {
            self.selected += columns;
        }
    }

    pub fn show_idle(&mut self) {
        self.screen = Screen::Idle;
    }

    pub fn show_library(&mut self) {
        self.screen = Screen::Library;
    }
}
