use std::path::PathBuf;

/// One playable file found by the scanner.
///
/// Deliberately bare: display metadata is resolved lazily by
/// `library::read_info` so a large library costs nothing to list.
#[derive(Clone, Debug)]
pub struct Track {
    pub path: PathBuf,
    /// Filename without extension; the default display title.
    pub file_stem: String,
}
