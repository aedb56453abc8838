//! User interface modules for the notes editor

pub mod app;
pub mod handlers;
pub mod message;
pub mod transport;

pub use app::NotesEditorApp;
pub use message::Message;
