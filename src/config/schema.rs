use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vitrine/config.toml` or
/// `~/.config/vitrine/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VITRINE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub kiosk: KioskSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Library directory. The first CLI argument takes precedence.
    pub dir: Option<String>,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories. A kiosk library is usually
    /// one flat directory.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: None,
            extensions: vec!["mp3".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Interval between progress polls (milliseconds).
    pub progress_interval_ms: u64,
    /// Whether a seek drag forwards intermediate positions to the engine
    /// for audible scrubbing. The displayed value follows the drag either
    /// way.
    pub live_scrub: bool,
    /// Number of seconds the arrow-key scrub jumps.
    pub scrub_seconds: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            progress_interval_ms: 500,
            live_scrub: false,
            scrub_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KioskSettings {
    /// Seconds of no interaction before the idle screen takes over.
    pub inactivity_timeout_secs: u64,
    /// Heading shown on the idle/info screen.
    pub idle_title: String,
    /// Body copy shown on the idle/info screen.
    pub idle_text: String,
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            inactivity_timeout_secs: 180,
            idle_title: "Listening station".to_string(),
            idle_text: "Pick any tile to hear the recording.\n\nPress any key to begin."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Number of tile columns in the grid.
    pub tile_columns: u16,
    /// Height of one tile row, in terminal lines.
    pub tile_height: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ vitrine ~ ".to_string(),
            tile_columns: 3,
            tile_height: 7,
        }
    }
}
