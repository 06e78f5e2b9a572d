//! UI rendering for the kiosk screens.
//!
//! Renders the tile grid, the transport bar with the progress gauge, and
//! the idle/info screen using `ratatui`. Rendering returns the hit areas
//! (tiles, progress gauge) the event loop needs for mouse routing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, Screen};
use crate::config::Settings;
use crate::player::{ProgressState, Transport};

/// Snapshot of the playback core for one frame.
pub struct PlayerView {
    pub transport: Transport,
    pub progress: ProgressState,
    pub now_playing: Option<String>,
}

/// Screen regions the event loop hit-tests mouse input against.
#[derive(Default)]
pub struct HitAreas {
    /// Tile rectangle and the track index it shows.
    pub tiles: Vec<(Rect, usize)>,
    /// Inner (borderless) area of the progress gauge.
    pub progress: Option<Rect>,
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

const CONTROLS_HELP: &str =
    " [arrows/hjkl] choose | [enter] play | [space] pause | [r] restart | [s] stop | [H/L] scrub | [i] info | [q] quit";

/// Render the foreground screen and report its hit areas.
pub fn draw(frame: &mut Frame, app: &mut App, view: &PlayerView, settings: &Settings) -> HitAreas {
    match app.screen {
        Screen::Idle => {
            draw_idle(frame, settings);
            HitAreas::default()
        }
        Screen::Library => draw_library(frame, app, view, settings),
    }
}

fn draw_idle(frame: &mut Frame, settings: &Settings) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(settings.kiosk.idle_title.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Paragraph::new(settings.kiosk.idle_text.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[1]);
}

fn draw_library(
    frame: &mut Frame,
    app: &mut App,
    view: &PlayerView,
    settings: &Settings,
) -> HitAreas {
    let mut hits = HitAreas::default();

    // The transport bar is hidden entirely while nothing is loaded.
    let transport_height: u16 = if view.transport == Transport::Hidden {
        0
    } else {
        4
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(transport_height),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(settings.ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" vitrine ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_tiles(frame, app, settings, chunks[1], &mut hits);

    if transport_height > 0 {
        draw_transport(frame, view, chunks[2], &mut hits);
    }

    // Footer: transient notice wins over the controls help.
    let footer_text = app
        .notice
        .clone()
        .unwrap_or_else(|| CONTROLS_HELP.to_string());
    let footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    hits
}

fn draw_tiles(frame: &mut Frame, app: &mut App, settings: &Settings, area: Rect, hits: &mut HitAreas) {
    if !app.has_tracks() {
        let dir = app.library_dir.as_deref().unwrap_or("?");
        let empty = Paragraph::new(format!("No audio files found in {dir}"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" tracks "));
        frame.render_widget(empty, area);
        return;
    }

    let columns = settings.ui.tile_columns.max(1) as usize;
    let tile_height = settings.ui.tile_height.max(4);
    let tile_width = (area.width / columns as u16).max(8);

    let total_rows = app.tracks.len().div_ceil(columns);
    let visible_rows = ((area.height / tile_height).max(1)) as usize;
    let selected_row = app.selected / columns;
    let start_row = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };

    for row in start_row..total_rows.min(start_row + visible_rows) {
        let y = area.y + ((row - start_row) as u16) * tile_height;
        if y + tile_height > area.y + area.height {
            break;
        }
        for col in 0..columns {
            let index = row * columns + col;
            if index >= app.tracks.len() {
                break;
            }
            let rect = Rect {
                x: area.x + (col as u16) * tile_width,
                y,
                width: tile_width,
                height: tile_height,
            };

            let selected = index == app.selected;
            let playing = app.playing_index == Some(index);
            let info = app.track_info(index).clone();

            let marker = if playing { "▶ " } else { "" };
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {marker}{} ", info.title))
                .border_style(if selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                });
            let tile = Paragraph::new(info.description)
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(tile, rect);
            hits.tiles.push((rect, index));
        }
    }
}

fn draw_transport(frame: &mut Frame, view: &PlayerView, area: Rect, hits: &mut HitAreas) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let state = match view.transport {
        Transport::Playing => "playing",
        Transport::Paused => "paused",
        Transport::Hidden => "stopped",
    };
    let title = view.now_playing.as_deref().unwrap_or("-");

    let progress = view.progress;
    let ratio = if progress.duration.is_zero() {
        0.0
    } else {
        (progress.position.as_secs_f64() / progress.duration.as_secs_f64()).clamp(0.0, 1.0)
    };
    let label = format!(
        "{} / {}",
        format_mmss(progress.position),
        format_mmss(progress.duration)
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} [{state}] ")),
        )
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[0]);
    hits.progress = Some(chunks[0].inner(Margin {
        horizontal: 1,
        vertical: 1,
    }));

    let hint = Paragraph::new(" [space] pause/resume   [r] restart   [s] stop   drag the bar to seek")
        .alignment(Alignment::Left);
    frame.render_widget(hint, chunks[1]);
}
