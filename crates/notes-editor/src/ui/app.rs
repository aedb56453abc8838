//! Main application state and message dispatch

use std::path::PathBuf;

use iced::widget::{column, container};
use iced::{Element, Length, Task, Theme};
use notes_core::{EditorSession, TimelineFrame};
use notes_widgets::{timeline_view, TimelineState};

use super::message::Message;
use super::transport;
use crate::audio::PreviewPlayer;
use crate::config::EditorConfig;

/// Notes editor application
pub struct NotesEditorApp {
    pub(crate) session: EditorSession<PreviewPlayer>,
    pub(crate) timeline: TimelineState,
    /// Latest cursor x reported by the timeline canvas
    pub(crate) cursor_x: Option<f32>,
    pub(crate) last_frame: Option<TimelineFrame>,
    pub(crate) config: EditorConfig,
    pub(crate) config_path: PathBuf,
    /// Result of the last "Save defaults"
    pub(crate) status: String,
}

impl NotesEditorApp {
    /// Create the editor over a player that already holds the clip
    pub fn new(
        player: PreviewPlayer,
        title: impl Into<String>,
        config: EditorConfig,
        config_path: PathBuf,
    ) -> Self {
        let session = EditorSession::new(player, title, &config.timeline, config.grid);
        let mut app = Self {
            session,
            timeline: TimelineState::new(),
            cursor_x: None,
            last_frame: None,
            config,
            config_path,
            status: String::new(),
        };
        // Populate the grid before the first tick arrives
        let _ = app.handle_tick();
        app
    }

    /// Window title
    pub fn title(&self) -> String {
        format!("notes-editor - {}", self.session.title())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => self.handle_tick(),
            Message::TogglePlayback => self.handle_toggle_playback(),
            Message::ScaleChanged(scale) => self.handle_scale_changed(scale),
            Message::DivisionsChanged(value) => self.handle_divisions_changed(value),
            Message::BpmTextChanged(text) => self.handle_bpm_text_changed(text),
            Message::TimelinePressed(x) => self.handle_timeline_pressed(x),
            Message::CursorMoved(x) => self.handle_cursor_moved(x),
            Message::TimelineReleased => self.handle_timeline_released(),
            Message::SaveDefaults => self.handle_save_defaults(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls = transport::view(self);
        let timeline = timeline_view(
            &self.timeline,
            Message::TimelinePressed,
            Message::CursorMoved,
            Message::TimelineReleased,
        );

        container(column![controls, timeline].spacing(10))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Frame ticks run while paused too, so drags keep scrubbing
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time;
        use std::time::Duration;

        let interval = Duration::from_millis(self.config.display.tick_interval_ms);
        time::every(interval).map(|_| Message::Tick)
    }
}
