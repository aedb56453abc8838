//! Common types for the notes editor
//!
//! Sample-domain and canvas-domain primitives shared by the timeline engine,
//! the clip loader and the rendering widgets.

use serde::{Deserialize, Serialize};

/// Audio sample type (32-bit float, normalized to -1.0..=1.0)
pub type Sample = f32;

/// Lowest accepted BPM
pub const MIN_BPM: u32 = 1;

/// Highest accepted BPM
pub const MAX_BPM: u32 = 320;

/// Samples per pixel of canvas width at scale factor 1.0
///
/// Initial canvas width is `total_samples / CANVAS_SAMPLES_PER_PIXEL`.
pub const CANVAS_SAMPLES_PER_PIXEL: f64 = 100.0;

/// Smallest scale factor accepted from the zoom slider
pub const MIN_SCALE_FACTOR: f32 = 0.01;

/// Largest zoom slider range accepted from config
pub const MAX_SCALE_FACTOR: f32 = 64.0;

/// Upper bound on grid subdivisions per measure
pub const MAX_DIVISIONS: u32 = 64;

/// A single stereo sample (left and right channels)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StereoSample {
    pub left: Sample,
    pub right: Sample,
}

impl StereoSample {
    /// Create a new stereo sample
    #[inline]
    pub fn new(left: Sample, right: Sample) -> Self {
        Self { left, right }
    }

    /// Create a silent stereo sample
    #[inline]
    pub fn silence() -> Self {
        Self::default()
    }

    /// Create a mono sample (same value in both channels)
    #[inline]
    pub fn mono(value: Sample) -> Self {
        Self { left: value, right: value }
    }
}

/// Linear RGBA color used for grid line descriptors
///
/// Kept toolkit-agnostic so the engine does not depend on a GUI crate;
/// widgets convert it at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineColor {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Scale every channel, alpha included
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }
}

/// A point in canvas-local units (x to the right, y up)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinePoint {
    pub x: f32,
    pub y: f32,
}

impl LinePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A line segment handed to a [`crate::LineRenderer`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub start: LinePoint,
    pub end: LinePoint,
    pub color: LineColor,
}
