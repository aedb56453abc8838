//! Canvas zoom and horizontal offset
//!
//! The canvas offset is never stored as truth. Every frame it is recomputed
//! from the playhead snapshot and the current canvas width, so zoom changes
//! and playhead movement can't drift apart.

use crate::playback::PlaybackState;
use crate::types::{CANVAS_SAMPLES_PER_PIXEL, MIN_SCALE_FACTOR};

/// Which upstream position source produced a frame's offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSource {
    /// Regular playhead sample
    Playhead,
    /// A resize fired this frame; offset uses the new width
    Resize,
}

/// Canvas width for a clip at a given zoom factor
pub fn canvas_width_for(total_samples: u64, scale_factor: f32) -> f32 {
    (total_samples as f64 / CANVAS_SAMPLES_PER_PIXEL * f64::from(scale_factor)) as f32
}

/// Pixel offset of the playhead on a canvas of the given width
///
/// The canvas itself is positioned at `-offset`.
pub fn compute_offset(position_samples: u64, total_samples: u64, canvas_width_px: f32) -> f32 {
    if total_samples == 0 {
        return 0.0;
    }
    let progress = position_samples as f64 / total_samples as f64;
    (f64::from(canvas_width_px) * progress) as f32
}

/// Zoom factor sanitized for canvas sizing
fn sanitize_scale(scale_factor: f32) -> f32 {
    if scale_factor.is_nan() {
        MIN_SCALE_FACTOR
    } else {
        scale_factor.max(MIN_SCALE_FACTOR)
    }
}

/// Zoom and offset state for the timeline canvas
#[derive(Debug, Clone)]
pub struct ScrollState {
    scale_factor: f32,
    canvas_width_px: f32,
    canvas_offset_px: f32,
    resized_this_frame: bool,
    last_source: OffsetSource,
}

impl ScrollState {
    /// Initial state: scale factor 1.0, width `total_samples / 100`
    pub fn new(total_samples: u64) -> Self {
        Self::with_scale(total_samples, 1.0)
    }

    pub fn with_scale(total_samples: u64, scale_factor: f32) -> Self {
        let scale_factor = sanitize_scale(scale_factor);
        Self {
            scale_factor,
            canvas_width_px: canvas_width_for(total_samples, scale_factor),
            canvas_offset_px: 0.0,
            resized_this_frame: false,
            last_source: OffsetSource::Playhead,
        }
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn canvas_width_px(&self) -> f32 {
        self.canvas_width_px
    }

    /// Offset computed by the most recent [`ScrollState::reconcile`]
    pub fn canvas_offset_px(&self) -> f32 {
        self.canvas_offset_px
    }

    pub fn last_source(&self) -> OffsetSource {
        self.last_source
    }

    /// Apply a zoom slider value
    ///
    /// Returns `false` when the value did not change. Otherwise the canvas is
    /// resized and the next reconcile is attributed to the resize.
    pub fn set_scale(&mut self, scale_factor: f32, total_samples: u64) -> bool {
        let scale_factor = sanitize_scale(scale_factor);
        if scale_factor == self.scale_factor {
            return false;
        }
        self.scale_factor = scale_factor;
        self.canvas_width_px = canvas_width_for(total_samples, scale_factor);
        self.resized_this_frame = true;
        log::debug!(
            "ScrollState: scale={} canvas_width_px={}",
            self.scale_factor,
            self.canvas_width_px
        );
        true
    }

    /// Recompute the offset for this frame
    ///
    /// Both sources evaluate the same formula against the same snapshot; a
    /// resize this frame only changes which source is credited.
    pub fn reconcile(&mut self, playback: &PlaybackState) -> f32 {
        self.last_source = if std::mem::take(&mut self.resized_this_frame) {
            OffsetSource::Resize
        } else {
            OffsetSource::Playhead
        };
        self.canvas_offset_px = compute_offset(
            playback.position_samples,
            playback.total_samples,
            self.canvas_width_px,
        );
        self.canvas_offset_px
    }
}
