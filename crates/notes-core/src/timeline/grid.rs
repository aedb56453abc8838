//! Beat grid line generation
//!
//! Produces the full set of vertical grid lines for a frame. The output is a
//! pure function of [`GridParams`] and [`GridStyle`], recomputed from scratch
//! every frame.

use serde::{Deserialize, Serialize};

use crate::types::{GridLine, LineColor, LinePoint};

/// Receives the frame's complete line set
///
/// Each call replaces whatever was drawn before.
pub trait LineRenderer {
    fn draw_lines(&mut self, lines: &[GridLine]);
}

/// Visual constants for grid lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// Lines span `-half_extent..=half_extent` vertically (canvas-local units)
    pub half_extent: f32,
    /// Measure boundary color
    pub primary: LineColor,
    /// Subdivision color
    pub secondary: LineColor,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            half_extent: 250.0,
            primary: LineColor::WHITE,
            secondary: LineColor::WHITE.scaled(0.5),
        }
    }
}

/// Inputs of one grid computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub total_samples: u64,
    pub unit_beat_samples: u64,
    pub divisions_per_measure: u32,
    pub canvas_width_px: f32,
    pub position_samples: u64,
}

impl GridParams {
    /// `ceil(total_samples / unit_beat_samples) * divisions_per_measure`
    pub fn line_count(&self) -> usize {
        if self.total_samples == 0 {
            return 0;
        }
        let beats = self.total_samples.div_ceil(self.unit_beat_samples.max(1));
        (beats * u64::from(self.divisions_per_measure.max(1))) as usize
    }
}

/// Append the grid for `params` to `out`
pub fn extend_grid_lines(params: &GridParams, style: &GridStyle, out: &mut Vec<GridLine>) {
    let count = params.line_count();
    if count == 0 {
        return;
    }

    let total = params.total_samples as f64;
    let unit = params.unit_beat_samples as f64;
    let divisions = params.divisions_per_measure.max(1);
    let width = f64::from(params.canvas_width_px);
    let offset = width * (params.position_samples as f64 / total);

    out.reserve(count);
    for i in 0..count {
        let per = i as f64 * unit / total / f64::from(divisions);
        let x = (per * width - offset) as f32;
        let color = if i % divisions as usize == 0 {
            style.primary
        } else {
            style.secondary
        };
        out.push(GridLine {
            start: LinePoint::new(x, style.half_extent),
            end: LinePoint::new(x, -style.half_extent),
            color,
        });
    }
}

/// Grid lines for `params`
pub fn grid_lines(params: &GridParams, style: &GridStyle) -> Vec<GridLine> {
    let mut lines = Vec::new();
    extend_grid_lines(params, style, &mut lines);
    lines
}

/// Frame-by-frame grid producer feeding a [`LineRenderer`]
///
/// Holds only a scratch buffer reused between frames; the output depends on
/// nothing but the parameters.
#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    style: GridStyle,
    scratch: Vec<GridLine>,
}

impl GridRenderer {
    pub fn new(style: GridStyle) -> Self {
        Self {
            style,
            scratch: Vec::new(),
        }
    }

    /// Compute this frame's lines and hand them to `renderer`
    ///
    /// Returns the number of lines drawn.
    pub fn render<R: LineRenderer + ?Sized>(
        &mut self,
        params: &GridParams,
        renderer: &mut R,
    ) -> usize {
        self.scratch.clear();
        extend_grid_lines(params, &self.style, &mut self.scratch);
        renderer.draw_lines(&self.scratch);
        self.scratch.len()
    }
}
