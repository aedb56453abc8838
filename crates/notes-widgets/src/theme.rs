//! Theme constants for the notes editor UI
//!
//! Colors and sizes used by the timeline canvas and the control bar.

use iced::Color;
use notes_core::LineColor;

/// Timeline background
pub const TIMELINE_BACKGROUND: Color = Color::from_rgb(0.1, 0.1, 0.12);

/// Fixed playhead marker at the horizontal center of the timeline
pub const PLAYHEAD_COLOR: Color = Color::from_rgb(1.0, 0.3, 0.3);

/// Shown instead of the grid when the clip has no samples
pub const EMPTY_CLIP_COLOR: Color = Color::from_rgba(0.5, 0.4, 0.3, 0.6);

/// Timeline canvas height in pixels
///
/// Matches the default grid extent so lines span the full height.
pub const TIMELINE_HEIGHT: f32 = 500.0;

pub const PLAYHEAD_WIDTH: f32 = 2.0;

pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Convert a core line color to an iced color
pub fn line_color(color: LineColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}
