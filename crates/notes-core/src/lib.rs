//! Notes Core - timeline engine for the rhythm game notes editor
//!
//! Everything here is toolkit independent: the audio backend and the drawing
//! surface are reached through the [`AudioPlayer`] and [`LineRenderer`]
//! traits.

pub mod clip;
pub mod config;
pub mod playback;
pub mod session;
pub mod timeline;
pub mod types;

#[cfg(test)]
mod testing;

pub use playback::{AudioPlayer, PlaybackState};
pub use session::{EditorEvent, EditorSession, SessionConfig, TimelineFrame};
pub use timeline::LineRenderer;
pub use types::*;
