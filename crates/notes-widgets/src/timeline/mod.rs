//! Scrolling beat grid timeline
//!
//! - [`TimelineState`]: line set and geometry of the last frame, filled as a
//!   [`notes_core::LineRenderer`]
//! - [`timeline_view`]: canvas element translating mouse input to callbacks

mod canvas;
mod state;
mod view;

pub use canvas::{TimelineCanvas, TimelineInteraction};
pub use state::TimelineState;
pub use view::timeline_view;
