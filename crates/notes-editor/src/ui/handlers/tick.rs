//! Tick handler: resolves one timeline frame
//!
//! Drag delta, transport sync, offset and grid are derived in that order
//! from one playback snapshot, then handed to the canvas state.

use iced::Task;

use super::super::app::NotesEditorApp;
use super::super::message::Message;

impl NotesEditorApp {
    /// Handle Tick message
    pub fn handle_tick(&mut self) -> Task<Message> {
        let frame = self.session.frame(self.cursor_x, &mut self.timeline);
        self.timeline.apply_frame(&frame);
        self.last_frame = Some(frame);

        // Free clip buffers released by the audio thread
        self.session.player_mut().collect();
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;

    #[test]
    fn test_initial_frame_populates_timeline() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(44100, dir.path().join("config.yaml"));

        // 120 BPM at 44.1kHz: two beats, four divisions each
        assert_eq!(app.timeline.lines().len(), 8);
        assert!(app.timeline.has_clip());
        assert_eq!(app.timeline.canvas_width_px(), 441.0);
        assert_eq!(app.timeline.canvas_offset_px(), 0.0);
    }

    #[test]
    fn test_empty_clip_renders_no_grid() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(0, dir.path().join("config.yaml"));
        assert!(app.timeline.lines().is_empty());
        assert!(!app.timeline.has_clip());
    }
}
