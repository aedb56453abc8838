//! Settings message handlers
//!
//! Handles: SaveDefaults

use iced::Task;
use notes_core::config::save_config;

use super::super::app::NotesEditorApp;
use super::super::message::Message;

impl NotesEditorApp {
    /// Handle SaveDefaults message
    ///
    /// The session's BPM, divisions and scale become the config defaults.
    pub fn handle_save_defaults(&mut self) -> Task<Message> {
        self.config.timeline = self.session.to_config();
        match save_config(&self.config, &self.config_path) {
            Ok(()) => {
                log::info!("Saved editor defaults to {:?}", self.config_path);
                self.status = "Defaults saved".to_string();
            }
            Err(e) => {
                log::error!("Failed to save editor defaults: {:#}", e);
                self.status = format!("Save failed: {}", e);
            }
        }
        Task::none()
    }
}
