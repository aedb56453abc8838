//! Timeline canvas and control message handlers
//!
//! Handles: TimelinePressed, CursorMoved, TimelineReleased, ScaleChanged,
//! DivisionsChanged, BpmTextChanged

use iced::Task;

use super::super::app::NotesEditorApp;
use super::super::message::Message;
use notes_core::EditorEvent;

impl NotesEditorApp {
    /// Handle TimelinePressed message
    pub fn handle_timeline_pressed(&mut self, x: f32) -> Task<Message> {
        self.cursor_x = Some(x);
        self.session.handle_event(EditorEvent::MouseDown { x });
        Task::none()
    }

    /// Handle CursorMoved message
    ///
    /// Only records the position; the drag is applied on the next tick.
    pub fn handle_cursor_moved(&mut self, x: f32) -> Task<Message> {
        self.cursor_x = Some(x);
        Task::none()
    }

    /// Handle TimelineReleased message
    pub fn handle_timeline_released(&mut self) -> Task<Message> {
        self.session.handle_event(EditorEvent::MouseUp);
        Task::none()
    }

    /// Handle ScaleChanged message
    pub fn handle_scale_changed(&mut self, scale: f32) -> Task<Message> {
        self.session.handle_event(EditorEvent::ScaleChanged(scale));
        Task::none()
    }

    /// Handle DivisionsChanged message
    pub fn handle_divisions_changed(&mut self, value: f32) -> Task<Message> {
        self.session.handle_event(EditorEvent::DivisionsChanged(value));
        Task::none()
    }

    /// Handle BpmTextChanged message
    pub fn handle_bpm_text_changed(&mut self, text: String) -> Task<Message> {
        self.session.handle_event(EditorEvent::BpmTextChanged(text));
        Task::none()
    }
}
