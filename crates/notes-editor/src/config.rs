//! Configuration for the notes editor
//!
//! Stored as YAML in the platform config directory.
//! Default location: `<config_dir>/notes-editor/config.yaml`

use std::path::PathBuf;

use notes_core::config::{default_config_path, default_music_path};
use notes_core::timeline::GridStyle;
use notes_core::{SessionConfig, MAX_DIVISIONS, MAX_SCALE_FACTOR, MIN_SCALE_FACTOR};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "config.yaml";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial BPM, divisions and zoom
    pub timeline: SessionConfig,
    /// Grid line extent and colors
    pub grid: GridStyle,
    pub display: DisplayConfig,
    /// Clip opened when no path is given on the command line
    pub music_path: Option<PathBuf>,
}

impl EditorConfig {
    /// Clamp every section into its accepted range
    pub fn validate(&mut self) {
        self.timeline.validate();
        self.display.validate();
    }

    /// Explicit `music_path`, else `<data_dir>/notes-editor/Musics/test.wav`
    pub fn resolved_music_path(&self) -> PathBuf {
        self.music_path.clone().unwrap_or_else(default_music_path)
    }
}

/// Display configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Frame tick period
    pub tick_interval_ms: u64,
    /// Upper end of the zoom slider
    pub max_scale: f32,
    /// Upper end of the divisions slider
    pub max_divisions: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 16,
            max_scale: 4.0,
            max_divisions: 32,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&mut self) {
        self.tick_interval_ms = self.tick_interval_ms.clamp(1, 1000);
        if self.max_scale.is_nan() || self.max_scale <= MIN_SCALE_FACTOR {
            self.max_scale = DisplayConfig::default().max_scale;
        }
        self.max_scale = self.max_scale.min(MAX_SCALE_FACTOR);
        self.max_divisions = self.max_divisions.clamp(1, MAX_DIVISIONS);
    }
}

/// `<config_dir>/notes-editor/config.yaml`
pub fn default_config_file() -> PathBuf {
    default_config_path(CONFIG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::config::{load_config, save_config};
    use notes_core::LineColor;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.timeline.default_bpm, 120);
        assert_eq!(config.timeline.default_divisions, 4);
        assert_eq!(config.timeline.default_scale, 1.0);
        assert_eq!(config.grid.half_extent, 250.0);
        assert_eq!(config.grid.secondary, LineColor::rgba(0.5, 0.5, 0.5, 0.5));
        assert_eq!(config.display.tick_interval_ms, 16);
        assert!(config.music_path.is_none());
    }

    #[test]
    fn test_validation_clamps_values() {
        let mut config = EditorConfig::default();
        config.timeline.default_bpm = 999;
        config.timeline.default_divisions = 0;
        config.timeline.default_scale = -3.0;
        config.display.tick_interval_ms = 0;
        config.display.max_scale = f32::NAN;
        config.display.max_divisions = 0;

        config.validate();
        assert_eq!(config.timeline.default_bpm, 320);
        assert_eq!(config.timeline.default_divisions, 1);
        assert_eq!(config.timeline.default_scale, MIN_SCALE_FACTOR);
        assert_eq!(config.display.tick_interval_ms, 1);
        assert_eq!(config.display.max_scale, 4.0);
        assert_eq!(config.display.max_divisions, 1);
    }

    #[test]
    fn test_validation_caps_hand_edited_ranges() {
        let yaml = "display:\n  max_scale: 1.0e9\n  max_divisions: 1000000\n";
        let mut config: EditorConfig = serde_yaml::from_str(yaml).unwrap();
        config.validate();
        assert_eq!(config.display.max_scale, MAX_SCALE_FACTOR);
        assert_eq!(config.display.max_divisions, MAX_DIVISIONS);
        assert_eq!(config.display.tick_interval_ms, 16);
    }

    #[test]
    fn test_partial_yaml_keeps_section_defaults() {
        let yaml = "timeline:\n  default_bpm: 174\nmusic_path: /tmp/song.wav\n";
        let config: EditorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.timeline.default_bpm, 174);
        assert_eq!(config.timeline.default_divisions, 4);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.resolved_music_path(), PathBuf::from("/tmp/song.wav"));
    }

    #[test]
    fn test_resolved_music_path_defaults_to_test_wav() {
        let config = EditorConfig::default();
        assert!(config.resolved_music_path().ends_with("Musics/test.wav"));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes-editor").join(CONFIG_FILENAME);
        let mut config = EditorConfig::default();
        config.timeline.default_bpm = 90;
        config.display.max_divisions = 16;

        save_config(&config, &path).unwrap();
        let loaded: EditorConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_file_location() {
        assert!(default_config_file().ends_with("notes-editor/config.yaml"));
    }
}
