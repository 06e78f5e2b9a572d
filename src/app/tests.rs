use std::path::PathBuf;

use super::*;
use crate::library::Track;

fn t(name: &str) -> Track {
    Track {
        path: PathBuf::from(format!("/nonexistent/{name}.mp3")),
        file_stem: name.into(),
    }
}

fn app_with(n: usize) -> App {
    App::new((0..n).map(|i| t(&format!("track{i}"))).collect())
}

#[test]
fn grid_movement_clamps_at_the_edges() {
    // 3 columns, 5 tracks:
    //   0 1 2
    //   3 4
    let mut app = app_with(5);

    app.move_left();
    assert_eq!(app.selected, 0);
    app.move_up(3);
    assert_eq!(app.selected, 0);

    app.move_right();
    app.move_right();
    assert_eq!(app.selected, 2);
    app.move_down(3);
    // Would land on 5, past the end.
    assert_eq!(app.selected, 2);

    app.set_selected(1);
    app.move_down(3);
    assert_eq!(app.selected, 4);
    app.move_right();
    assert_eq!(app.selected, 4);
    app.move_up(3);
    assert_eq!(app.selected, 1);
}

#[test]
fn set_selected_ignores_out_of_range_indices() {
    let mut app = app_with(2);
    app.set_selected(7);
    assert_eq!(app.selected, 0);
    app.set_selected(1);
    assert_eq!(app.selected, 1);
}

#[test]
fn track_info_is_resolved_lazily_and_cached() {
    let mut app = app_with(2);

    // Nonexistent files still produce filename-derived defaults.
    let title = app.track_info(1).title.clone();
    assert_eq!(title, "track1");

    // Second lookup returns the cached value.
    assert_eq!(app.track_info(1).title, title);
}

#[test]
fn screen_transitions_flip_between_library_and_idle() {
    let mut app = app_with(1);
    assert_eq!(app.screen, Screen::Library);
    app.show_idle();
    assert_eq!(app.screen, Screen::Idle);
    app.show_library();
    assert_eq!(app.screen, Screen::Library);
}
