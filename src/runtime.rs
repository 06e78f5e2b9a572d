use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use std::{env, fs};

use anyhow::Context;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::engine::RodioEngine;
use crate::library::scan;
use crate::player::Player;
use crate::watchdog::Watchdog;

mod event_loop;
mod settings;

pub fn run() -> anyhow::Result<()> {
    init_tracing();
    let settings = settings::load_settings();

    let dir = env::args()
        .nth(1)
        .or_else(|| settings.library.dir.clone())
        .unwrap_or_else(|| "Music".to_string());

    let tracks = scan(Path::new(&dir), &settings.library);
    info!("starting with {} tracks from {dir}", tracks.len());

    let engine = RodioEngine::new().context("no audio output device")?;
    let mut player = Player::new(
        engine,
        Duration::from_millis(settings.playback.progress_interval_ms),
    );
    let mut watchdog = Watchdog::new(Duration::from_secs(settings.kiosk.inactivity_timeout_secs));

    let mut app = App::new(tracks);
    app.library_dir = Some(dir);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut player,
        &mut watchdog,
    );

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    run_result
}

/// Logs go to a file: stdout/stderr belong to the TUI. A kiosk that cannot
/// log still has to run, so every failure here is silently tolerated.
fn init_tracing() {
    let Some(path) = log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = File::create(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// `$XDG_STATE_HOME/vitrine/vitrine.log` or `~/.local/state/vitrine/vitrine.log`.
fn log_file_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("state"))
    } else {
        None
    };

    state_home.map(|d| d.join("vitrine").join("vitrine.log"))
}
