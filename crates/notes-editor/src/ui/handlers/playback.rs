//! Playback control message handlers
//!
//! Handles: TogglePlayback

use iced::Task;

use super::super::app::NotesEditorApp;
use super::super::message::Message;
use notes_core::EditorEvent;

impl NotesEditorApp {
    /// Handle TogglePlayback message
    pub fn handle_toggle_playback(&mut self) -> Task<Message> {
        self.session.handle_event(EditorEvent::TogglePlayback);
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;
    use notes_core::timeline::PLAY_LABEL;

    #[test]
    fn test_toggle_without_device_returns_to_play() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(44100, dir.path().join("config.yaml"));

        let _ = app.update(Message::TogglePlayback);
        // The disconnected player never starts, so the next frame reverts
        let _ = app.update(Message::Tick);
        assert!(!app.session.is_playing());
        assert_eq!(app.session.transport_label(), PLAY_LABEL);
    }
}
