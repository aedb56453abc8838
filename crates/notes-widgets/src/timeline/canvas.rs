//! Canvas Program for the scrolling beat grid
//!
//! The playhead stays fixed at the horizontal center; grid line x values are
//! already relative to it, so drawing only translates into view coordinates.
//! Mouse x is reported in window coordinates since only deltas between
//! frames matter to the scrub logic.

use super::state::TimelineState;
use crate::theme::{
    line_color, EMPTY_CLIP_COLOR, GRID_LINE_WIDTH, PLAYHEAD_COLOR, PLAYHEAD_WIDTH,
    TIMELINE_BACKGROUND,
};
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};

/// Shading for the part of the view covered by the clip
const CLIP_REGION_COLOR: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.04);

/// Canvas state: whether a press started on this canvas
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineInteraction {
    pub is_dragging: bool,
}

/// Timeline canvas with drag-to-scrub callbacks
pub struct TimelineCanvas<'a, Message, Press, Move>
where
    Press: Fn(f32) -> Message,
    Move: Fn(f32) -> Message,
{
    pub state: &'a TimelineState,
    pub on_press: Press,
    pub on_move: Move,
    pub on_release: Message,
}

impl<'a, Message, Press, Move> Program<Message> for TimelineCanvas<'a, Message, Press, Move>
where
    Message: Clone,
    Press: Fn(f32) -> Message,
    Move: Fn(f32) -> Message,
{
    type State = TimelineInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    let position = cursor.position()?;
                    interaction.is_dragging = true;
                    return Some(canvas::Action::publish((self.on_press)(position.x)));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if interaction.is_dragging {
                    return Some(canvas::Action::publish((self.on_move)(position.x)));
                }
            }
            // Released anywhere, including outside the canvas
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if interaction.is_dragging {
                    interaction.is_dragging = false;
                    return Some(canvas::Action::publish(self.on_release.clone()));
                }
            }
            _ => {}
        }
        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let height = bounds.height;
        let center_x = width / 2.0;
        let center_y = height / 2.0;

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), TIMELINE_BACKGROUND);

        if !self.state.has_clip() {
            for x in (0..(width as usize)).step_by(20) {
                frame.fill_rectangle(
                    Point::new(x as f32, center_y - 1.0),
                    Size::new(10.0, 2.0),
                    EMPTY_CLIP_COLOR,
                );
            }
            return vec![frame.into_geometry()];
        }

        // Clip extent: the canvas origin sits at -offset relative to the playhead
        let origin_x = center_x - self.state.canvas_offset_px();
        let clip_left = origin_x.max(0.0);
        let clip_right = (origin_x + self.state.canvas_width_px()).min(width);
        if clip_right > clip_left {
            frame.fill_rectangle(
                Point::new(clip_left, 0.0),
                Size::new(clip_right - clip_left, height),
                CLIP_REGION_COLOR,
            );
        }

        for line in self.state.lines() {
            let x = center_x + line.start.x;
            if x < -GRID_LINE_WIDTH || x > width + GRID_LINE_WIDTH {
                continue;
            }
            frame.stroke(
                &Path::line(
                    Point::new(x, center_y - line.start.y),
                    Point::new(center_x + line.end.x, center_y - line.end.y),
                ),
                Stroke::default()
                    .with_color(line_color(line.color))
                    .with_width(GRID_LINE_WIDTH),
            );
        }

        frame.stroke(
            &Path::line(Point::new(center_x, 0.0), Point::new(center_x, height)),
            Stroke::default()
                .with_color(PLAYHEAD_COLOR)
                .with_width(PLAYHEAD_WIDTH),
        );

        vec![frame.into_geometry()]
    }
}
