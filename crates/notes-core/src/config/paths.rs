//! Standard locations for the editor's files

use std::path::PathBuf;

/// Directory name used under the platform config and data directories
pub const APP_DIR: &str = "notes-editor";

/// `<config_dir>/notes-editor/{filename}`
///
/// Falls back to the working directory when the platform has no config dir.
pub fn default_config_path(filename: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(filename)
}

/// `<data_dir>/notes-editor/Musics/test.wav`
pub fn default_music_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("Musics")
        .join("test.wav")
}
