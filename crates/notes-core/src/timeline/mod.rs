//! Timeline synchronization engine
//!
//! Components, leaves first:
//!
//! - [`BeatClock`]: BPM -> samples per grid subdivision
//! - [`ScrollState`]: canvas width (zoom) and per-frame offset
//! - [`ScrubController`]: drag-to-seek state machine
//! - [`GridRenderer`]: vertical grid lines for the visible canvas
//! - [`TransportController`]: play/pause toggle and label

mod beat_clock;
mod grid;
mod scroll;
mod scrub;
mod transport;

pub use beat_clock::{compute_unit_beat_samples, parse_bpm, BeatClock, DivisionState};
pub use grid::{extend_grid_lines, grid_lines, GridParams, GridRenderer, GridStyle, LineRenderer};
pub use scroll::{canvas_width_for, compute_offset, OffsetSource, ScrollState};
pub use scrub::{
    apply_delta, drag_delta_samples, DragSession, ScrubController, ScrubEffect, ScrubState,
};
pub use transport::{TransportController, PAUSE_LABEL, PLAY_LABEL};
