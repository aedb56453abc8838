//! Timeline view function

use super::canvas::TimelineCanvas;
use super::state::TimelineState;
use crate::theme::TIMELINE_HEIGHT;
use iced::widget::Canvas;
use iced::{Element, Length};

/// Create the beat grid timeline with drag-to-scrub
///
/// * `on_press` - called with the cursor x when a left press starts a drag
/// * `on_move` - called with the cursor x while dragging
/// * `on_release` - published when the button is released, wherever the cursor is
///
/// ```ignore
/// let timeline = timeline_view(
///     &self.timeline,
///     Message::TimelinePressed,
///     Message::CursorMoved,
///     Message::TimelineReleased,
/// );
/// ```
pub fn timeline_view<'a, Message>(
    state: &'a TimelineState,
    on_press: impl Fn(f32) -> Message + 'a,
    on_move: impl Fn(f32) -> Message + 'a,
    on_release: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(TimelineCanvas {
        state,
        on_press,
        on_move,
        on_release,
    })
    .width(Length::Fill)
    .height(Length::Fixed(TIMELINE_HEIGHT))
    .into()
}
