//! Message handlers organized by feature domain
//!
//! Each sub-module provides handler methods on NotesEditorApp.

pub mod playback;
pub mod settings;
pub mod tick;
pub mod timeline;
