//! Notes Editor - entry point
//!
//! 1. Loads the config and the music clip
//! 2. Starts the cpal preview stream (or runs without audio)
//! 3. Launches the iced GUI
//!
//! Usage: `notes-editor [path/to/clip.wav]`

use std::cell::RefCell;
use std::path::PathBuf;

use anyhow::{Context, Result};
use iced::{Size, Task};
use notes_core::clip::AudioClip;
use notes_core::config::load_config;
use notes_editor::audio::{start_preview_stream, PreviewPlayer};
use notes_editor::config::{default_config_file, EditorConfig};
use notes_editor::ui::{Message, NotesEditorApp};

fn main() -> Result<()> {
    // Set RUST_LOG=debug for state machine transitions
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("notes-editor starting up");

    let config_path = default_config_file();
    let mut config: EditorConfig = load_config(&config_path);
    config.validate();

    let music_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.resolved_music_path());

    let clip = AudioClip::load(&music_path)
        .with_context(|| format!("Failed to load music clip {:?}", music_path))?;
    let title = clip.title().to_string();

    let (mut player, stream_handle) = match start_preview_stream(clip.sample_rate()) {
        Ok((player, handle)) => {
            if handle.device_sample_rate != clip.sample_rate() {
                log::warn!(
                    "Clip is {}Hz but the device runs at {}Hz",
                    clip.sample_rate(),
                    handle.device_sample_rate
                );
            }
            (player, Some(handle))
        }
        Err(e) => {
            log::warn!("Audio preview not available: {} - running silent", e);
            (PreviewPlayer::disconnected(), None)
        }
    };
    player.load_clip(clip);

    let window_size = Size::new(1000.0, 700.0);

    // The boot closure must be Fn; the player is moved out on the first call
    let player_cell = RefCell::new(Some(player));

    iced::application(
        move || {
            let player = player_cell.borrow_mut().take().unwrap_or_else(|| {
                log::warn!("Application rebooted, audio preview detached");
                PreviewPlayer::disconnected()
            });
            let app =
                NotesEditorApp::new(player, title.clone(), config.clone(), config_path.clone());
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title(title_fn)
    .window_size(window_size)
    .run()
    .map_err(|e| anyhow::anyhow!("GUI exited with an error: {}", e))?;

    // Keep the stream alive until the window closes
    drop(stream_handle);
    log::info!("notes-editor stopped");
    Ok(())
}

fn update(app: &mut NotesEditorApp, message: Message) -> Task<Message> {
    app.update(message)
}

fn view(app: &NotesEditorApp) -> iced::Element<'_, Message> {
    app.view()
}

fn subscription(app: &NotesEditorApp) -> iced::Subscription<Message> {
    app.subscription()
}

fn theme(app: &NotesEditorApp) -> iced::Theme {
    app.theme()
}

fn title_fn(app: &NotesEditorApp) -> String {
    app.title()
}
