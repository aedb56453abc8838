//! Timeline display state

use notes_core::{GridLine, LineRenderer, TimelineFrame};

/// What the timeline canvas draws
///
/// Filled once per tick: the session pushes the grid through
/// [`LineRenderer`], then [`TimelineState::apply_frame`] records the frame's
/// geometry summary.
#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    lines: Vec<GridLine>,
    canvas_offset_px: f32,
    canvas_width_px: f32,
    has_clip: bool,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    pub fn canvas_offset_px(&self) -> f32 {
        self.canvas_offset_px
    }

    pub fn canvas_width_px(&self) -> f32 {
        self.canvas_width_px
    }

    /// False when the last frame reported an empty clip
    pub fn has_clip(&self) -> bool {
        self.has_clip
    }

    pub fn apply_frame(&mut self, frame: &TimelineFrame) {
        self.canvas_offset_px = frame.canvas_offset_px;
        self.canvas_width_px = frame.canvas_width_px;
        let has_clip = frame.playback.total_samples > 0;
        if has_clip != self.has_clip {
            log::debug!("TimelineState: has_clip={}", has_clip);
        }
        self.has_clip = has_clip;
    }
}

impl LineRenderer for TimelineState {
    fn draw_lines(&mut self, lines: &[GridLine]) {
        self.lines.clear();
        self.lines.extend_from_slice(lines);
    }
}
