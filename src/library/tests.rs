use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use super::model::Track;
use super::read_info;

fn track(path: PathBuf) -> Track {
    let file_stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    Track { path, file_stem }
}

#[test]
fn read_info_falls_back_to_filename_and_placeholders() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Gymnopedie No 1.mp3");
    fs::write(&path, b"not a real mp3").unwrap();

    let info = read_info(&track(path));
    assert_eq!(info.title, "Gymnopedie No 1");
    assert_eq!(
        info.description,
        "Composer: <not listed>\nPerformers: <not listed>\nYear: <not listed>"
    );
}

#[test]
fn read_info_survives_a_missing_file() {
    let info = read_info(&track(PathBuf::from("/nonexistent/ghost.mp3")));
    assert_eq!(info.title, "ghost");
    assert!(info.description.contains("<not listed>"));
}

#[test]
fn sidecar_text_wins_over_tag_description() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exhibit.mp3");
    fs::write(&path, b"not a real mp3").unwrap();
    fs::write(
        dir.path().join("exhibit.txt"),
        "A barrel organ recorded on the museum floor in 1907.\n",
    )
    .unwrap();

    let info = read_info(&track(path));
    assert_eq!(
        info.description,
        "A barrel organ recorded on the museum floor in 1907."
    );
}

#[test]
fn empty_sidecar_is_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exhibit.mp3");
    fs::write(&path, b"not a real mp3").unwrap();
    fs::write(dir.path().join("exhibit.txt"), "   \n").unwrap();

    let info = read_info(&track(path));
    assert!(info.description.starts_with("Composer:"));
}
