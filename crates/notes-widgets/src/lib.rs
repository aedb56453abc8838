//! UI widgets for the notes editor
//!
//! Following the iced 0.14 patterns:
//!
//! - **State structs**: pure data (`TimelineState`)
//! - **View functions**: take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: custom rendering and event-to-callback translation

pub mod theme;
pub mod timeline;

pub use theme::{line_color, TIMELINE_HEIGHT};
pub use timeline::{timeline_view, TimelineInteraction, TimelineState};
