//! Control bar above the timeline
//!
//! Title, play/pause toggle, zoom and division sliders, BPM field and the
//! "Save defaults" action.

use super::app::NotesEditorApp;
use super::message::Message;
use iced::widget::{button, column, row, slider, text, text_input, Space};
use iced::{Alignment, Element, Length};
use notes_core::MIN_SCALE_FACTOR;

/// Render the control bar
pub fn view(app: &NotesEditorApp) -> Element<'_, Message> {
    let session = &app.session;
    let display = &app.config.display;

    let title = text(session.title()).size(20);

    let play_btn = button(text(session.transport_label()).size(14))
        .on_press(Message::TogglePlayback)
        .width(Length::Fixed(80.0));

    let scale_slider = slider(
        MIN_SCALE_FACTOR..=display.max_scale,
        session.scale_factor(),
        Message::ScaleChanged,
    )
    .step(0.01)
    .width(Length::Fixed(200.0));
    let scale_row = row![
        text("Zoom").size(12),
        scale_slider,
        text(format!("{:.2}x", session.scale_factor())).size(12),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let divisions_slider = slider(
        1.0..=display.max_divisions as f32,
        session.divisions_per_measure() as f32,
        Message::DivisionsChanged,
    )
    .step(1.0)
    .width(Length::Fixed(160.0));
    let divisions_row = row![
        text("Divisions").size(12),
        divisions_slider,
        text(format!("{}", session.divisions_per_measure())).size(12),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let bpm_input = text_input("BPM", session.bpm_text())
        .on_input(Message::BpmTextChanged)
        .width(Length::Fixed(80.0));
    let bpm_row = row![text("BPM").size(12), bpm_input]
        .spacing(8)
        .align_y(Alignment::Center);

    let save_btn = button(text("Save defaults").size(12)).on_press(Message::SaveDefaults);

    let position = match app.last_frame {
        Some(frame) => format!(
            "{} / {} samples",
            frame.playback.position_samples, frame.playback.total_samples
        ),
        None => String::new(),
    };

    let header = row![
        title,
        Space::new().width(Length::Fill),
        text(position).size(12),
        text(&app.status).size(12),
        save_btn,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let controls = row![play_btn, scale_row, divisions_row, bpm_row]
        .spacing(20)
        .align_y(Alignment::Center);

    column![header, controls].spacing(10).into()
}
