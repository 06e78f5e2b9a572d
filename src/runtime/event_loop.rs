//! Session coordinator: the cooperative event loop.
//!
//! One loop turn = poll the playback core (completion + progress tick),
//! poll the watchdog, draw, then handle at most one pending input event.
//! Every user interaction resets the watchdog; natural completion does not.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::{App, Screen};
use crate::config::Settings;
use crate::engine::RodioEngine;
use crate::player::{Player, StopReason};
use crate::ui::{self, HitAreas, PlayerView};
use crate::watchdog::Watchdog;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    player: &mut Player<RodioEngine>,
    watchdog: &mut Watchdog,
) -> anyhow::Result<()> {
    let columns = settings.ui.tile_columns.max(1) as usize;
    let scrub = settings.playback.scrub_seconds as i64;
    let live_scrub = settings.playback.live_scrub;

    // Library-screen entry arms the watchdog.
    watchdog.reset(Instant::now());

    let mut hits = HitAreas::default();
    // Gauge rect captured at mouse-down; a drag stays bound to it even when
    // the pointer leaves the bar.
    let mut seek_area: Option<Rect> = None;

    loop {
        let now = Instant::now();
        player.poll(now);
        if !player.is_active() {
            app.playing_index = None;
        }
        if watchdog.poll(now) {
            info!("inactivity timeout, showing idle screen");
            app.show_idle();
        }

        let view = PlayerView {
            transport: player.transport(),
            progress: player.progress(),
            now_playing: app
                .playing_index
                .map(|i| app.track_info(i).title.clone()),
        };
        terminal.draw(|frame| {
            hits = ui::draw(frame, app, &view, settings);
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                watchdog.reset(Instant::now());
                app.notice = None;

                if app.screen == Screen::Idle {
                    // Any key wakes the kiosk; the reset above re-armed it.
                    app.show_library();
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => {
                        player.stop(StopReason::User);
                        return Ok(());
                    }
                    KeyCode::Left | KeyCode::Char('h') => app.move_left(),
                    KeyCode::Right | KeyCode::Char('l') => app.move_right(),
                    KeyCode::Up | KeyCode::Char('k') => app.move_up(columns),
                    KeyCode::Down | KeyCode::Char('j') => app.move_down(columns),
                    KeyCode::Enter => play_selected(app, player),
                    KeyCode::Char(' ') | KeyCode::Char('p') => player.toggle_pause(),
                    KeyCode::Char('r') => player.restart(),
                    KeyCode::Char('s') => player.stop(StopReason::User),
                    KeyCode::Char('H') => player.seek_by(-scrub),
                    KeyCode::Char('L') => player.seek_by(scrub),
                    KeyCode::Char('i') => {
                        // The library screen goes to the background; it must
                        // not fire a stale transition later.
                        watchdog.cancel();
                        app.show_idle();
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                watchdog.reset(Instant::now());

                if app.screen == Screen::Idle {
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        app.notice = None;
                        app.show_library();
                    }
                    continue;
                }

                let pos = Position {
                    x: mouse.column,
                    y: mouse.row,
                };
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        app.notice = None;
                        if let Some(rect) = hits.progress.filter(|r| r.contains(pos)) {
                            seek_area = Some(rect);
                            player.on_seek_start();
                            player.on_seek_drag(
                                seek_target(rect, mouse.column, player.duration()),
                                live_scrub,
                            );
                        } else if let Some(&(_, index)) =
                            hits.tiles.iter().find(|(r, _)| r.contains(pos))
                        {
                            app.set_selected(index);
                            play_selected(app, player);
                        }
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        if let Some(rect) = seek_area {
                            player.on_seek_drag(
                                seek_target(rect, mouse.column, player.duration()),
                                live_scrub,
                            );
                        }
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        if let Some(rect) = seek_area.take() {
                            player.on_seek_end(seek_target(rect, mouse.column, player.duration()));
                        }
                    }
                    _ => {}
                }
            }
            Event::FocusGained => {
                // Foregrounded again: fresh countdown.
                watchdog.reset(Instant::now());
            }
            Event::FocusLost => {
                watchdog.cancel();
            }
            _ => {}
        }
    }
}

fn play_selected(app: &mut App, player: &mut Player<RodioEngine>) {
    if !app.has_tracks() {
        return;
    }
    let track = app.tracks[app.selected].clone();
    match player.play(track, Instant::now()) {
        Ok(()) => {
            app.playing_index = Some(app.selected);
        }
        Err(e) => {
            warn!("{e}");
            app.notice = Some(e.to_string());
        }
    }
}

/// Map a pointer column on the gauge to a playback position.
fn seek_target(rect: Rect, column: u16, duration: Duration) -> Duration {
    if duration.is_zero() || rect.width == 0 {
        return Duration::ZERO;
    }
    let col = column.clamp(rect.x, rect.x + rect.width - 1);
    let span = u16::max(rect.width - 1, 1);
    let frac = f64::from(col - rect.x) / f64::from(span);
    duration.mul_f64(frac)
}

#[cfg(test)]
mod tests {
    use super::seek_target;
    use ratatui::layout::Rect;
    use std::time::Duration;

    #[test]
    fn seek_target_maps_the_gauge_span_onto_the_duration() {
        let rect = Rect {
            x: 10,
            y: 5,
            width: 101,
            height: 1,
        };
        let dur = Duration::from_secs(200);

        assert_eq!(seek_target(rect, 10, dur), Duration::ZERO);
        assert_eq!(seek_target(rect, 60, dur), Duration::from_secs(100));
        assert_eq!(seek_target(rect, 110, dur), dur);
        // Columns outside the bar clamp to its ends.
        assert_eq!(seek_target(rect, 0, dur), Duration::ZERO);
        assert_eq!(seek_target(rect, 200, dur), dur);
    }

    #[test]
    fn seek_target_guards_unknown_duration_and_zero_width() {
        let rect = Rect {
            x: 0,
            y: 0,
            width: 0,
            height: 1,
        };
        assert_eq!(
            seek_target(rect, 5, Duration::from_secs(10)),
            Duration::ZERO
        );

        let rect = Rect {
            x: 0,
            y: 0,
            width: 50,
            height: 1,
        };
        assert_eq!(seek_target(rect, 5, Duration::ZERO), Duration::ZERO);
    }
}
