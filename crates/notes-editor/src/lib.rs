//! Notes Editor - beat grid timeline for authoring rhythm game notes
//!
//! Loads a clip, previews it through cpal and shows a scrollable beat grid
//! that follows the playhead. Dragging the grid scrubs through the clip.

pub mod audio;
pub mod config;
pub mod ui;
