//! Drag-to-scrub state machine
//!
//! ```text
//!            mouse down (paused)             mouse up
//!   Idle ───────────────────────▶ Dragging ───────────▶ Idle
//!     │
//!     │ mouse down (playing)                            mouse up
//!     └──────────────────▶ DraggingWhilePausedForDrag ──────────▶ Idle (+ resume)
//! ```
//!
//! While either dragging state is active, every frame pairs the previous
//! mouse x with the current one and seeks the playhead by the equivalent
//! number of samples. Play/pause side effects are returned as
//! [`ScrubEffect`] values for the transport to apply, so the controller never
//! calls the player's play/pause itself.

use crate::playback::AudioPlayer;

/// Ephemeral state of one held mouse button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Whole-pixel mouse x seen on the previous frame
    pub last_mouse_x: f32,
    /// Whether playback was running when the drag began
    pub was_playing_before_drag: bool,
}

/// Scrub controller state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrubState {
    #[default]
    Idle,
    /// Drag started while paused
    Dragging(DragSession),
    /// Drag started while playing; playback was paused for the drag
    DraggingWhilePausedForDrag(DragSession),
}

impl ScrubState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, ScrubState::Idle)
    }

    fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            ScrubState::Idle => None,
            ScrubState::Dragging(session) | ScrubState::DraggingWhilePausedForDrag(session) => {
                Some(session)
            }
        }
    }
}

/// Playback side effect requested by a scrub transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubEffect {
    None,
    /// Pause playback for the duration of the drag
    PauseForDrag,
    /// Resume playback that was paused for the drag
    ResumeAfterDrag,
}

/// Sample delta for a pixel delta on a canvas of the given width
///
/// `floor(total_samples * delta_px / canvas_width_px)`; zero for a
/// degenerate canvas.
pub fn drag_delta_samples(delta_px: f32, total_samples: u64, canvas_width_px: f32) -> i64 {
    if canvas_width_px <= 0.0 || !canvas_width_px.is_finite() {
        return 0;
    }
    (total_samples as f64 * f64::from(delta_px) / f64::from(canvas_width_px)).floor() as i64
}

/// Apply a sample delta, clamping into `[0, total_samples - 1]`
pub fn apply_delta(position_samples: u64, delta_samples: i64, total_samples: u64) -> u64 {
    let last = total_samples.saturating_sub(1) as i64;
    let target = (position_samples as i64).saturating_add(delta_samples);
    target.clamp(0, last.max(0)) as u64
}

/// Mediates mouse-drag scrubbing of the timeline
#[derive(Debug, Clone, Default)]
pub struct ScrubController {
    state: ScrubState,
}

impl ScrubController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScrubState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Begin a drag at `mouse_x`
    ///
    /// A mouse-down while a drag is already active replaces that drag; any
    /// resume it was holding is dropped.
    pub fn mouse_down(&mut self, mouse_x: f32, is_playing: bool) -> ScrubEffect {
        if self.state.is_dragging() {
            log::debug!("ScrubController: new mouse-down replaces active drag");
        }

        let session = DragSession {
            last_mouse_x: mouse_x.floor(),
            was_playing_before_drag: is_playing,
        };

        if is_playing {
            self.state = ScrubState::DraggingWhilePausedForDrag(session);
            log::debug!("ScrubController: Idle -> DraggingWhilePausedForDrag");
            ScrubEffect::PauseForDrag
        } else {
            self.state = ScrubState::Dragging(session);
            log::debug!("ScrubController: Idle -> Dragging");
            ScrubEffect::None
        }
    }

    /// Advance an active drag by one frame
    ///
    /// Pairs the stored mouse x with `mouse_x`, seeks the player and stores
    /// `mouse_x` for the next frame. Returns the applied sample delta, or
    /// `None` when no drag is active.
    pub fn drag_frame<P: AudioPlayer + ?Sized>(
        &mut self,
        mouse_x: f32,
        canvas_width_px: f32,
        player: &mut P,
    ) -> Option<i64> {
        let session = self.state.session_mut()?;
        let current_x = mouse_x.floor();
        let delta_px = session.last_mouse_x - current_x;
        session.last_mouse_x = current_x;

        let total_samples = player.total_samples();
        if total_samples == 0 {
            return Some(0);
        }

        let delta_samples = drag_delta_samples(delta_px, total_samples, canvas_width_px);
        if delta_samples != 0 {
            let position = apply_delta(player.position_samples(), delta_samples, total_samples);
            player.set_position_samples(position);
        }
        Some(delta_samples)
    }

    /// End the active drag
    pub fn mouse_up(&mut self) -> ScrubEffect {
        match std::mem::take(&mut self.state) {
            ScrubState::Idle => ScrubEffect::None,
            ScrubState::Dragging(_) => {
                log::debug!("ScrubController: Dragging -> Idle");
                ScrubEffect::None
            }
            ScrubState::DraggingWhilePausedForDrag(session) => {
                log::debug!("ScrubController: DraggingWhilePausedForDrag -> Idle");
                if session.was_playing_before_drag {
                    ScrubEffect::ResumeAfterDrag
                } else {
                    ScrubEffect::None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlayer;

    #[test]
    fn test_drag_delta_samples() {
        assert_eq!(drag_delta_samples(10.0, 44100, 500.0), 882);
        assert_eq!(drag_delta_samples(-10.0, 44100, 500.0), -882);
        assert_eq!(drag_delta_samples(1.0, 44100, 441.0), 100);
        // floor(-0.5) = -1
        assert_eq!(drag_delta_samples(-1.0, 1, 2.0), -1);
        assert_eq!(drag_delta_samples(10.0, 44100, 0.0), 0);
    }

    #[test]
    fn test_apply_delta_clamps() {
        assert_eq!(apply_delta(1000, 882, 44100), 1882);
        assert_eq!(apply_delta(100, -500, 44100), 0);
        assert_eq!(apply_delta(44000, 500, 44100), 44099);
        assert_eq!(apply_delta(0, 5, 0), 0);
    }

    #[test]
    fn test_paired_consecutive_frames() {
        let mut player = FakePlayer::new(44100, 44100).at(1000);
        let mut scrub = ScrubController::new();

        assert_eq!(scrub.mouse_down(100.0, false), ScrubEffect::None);
        assert_eq!(scrub.drag_frame(90.0, 500.0, &mut player), Some(882));
        assert_eq!(player.position_samples(), 1882);
        assert_eq!(scrub.drag_frame(80.0, 500.0, &mut player), Some(882));
        assert_eq!(player.position_samples(), 2764);
        // Mouse held still: no movement
        assert_eq!(scrub.drag_frame(80.4, 500.0, &mut player), Some(0));
        assert_eq!(player.position_samples(), 2764);
        assert_eq!(player.seek_count(), 2);
    }

    #[test]
    fn test_idle_frames_do_nothing() {
        let mut player = FakePlayer::new(44100, 44100);
        let mut scrub = ScrubController::new();
        assert_eq!(scrub.drag_frame(10.0, 500.0, &mut player), None);
        assert_eq!(player.seek_count(), 0);
    }

    #[test]
    fn test_restart_does_not_carry_stale_delta() {
        let mut player = FakePlayer::new(44100, 44100).at(5000);
        let mut scrub = ScrubController::new();

        scrub.mouse_down(100.0, false);
        scrub.drag_frame(90.0, 500.0, &mut player);
        scrub.mouse_up();
        let after_first = player.position_samples();

        // New drag far away from where the last one ended
        scrub.mouse_down(400.0, false);
        assert_eq!(scrub.drag_frame(400.0, 500.0, &mut player), Some(0));
        assert_eq!(player.position_samples(), after_first);
    }

    #[test]
    fn test_pause_and_resume_effects() {
        let mut scrub = ScrubController::new();
        assert_eq!(scrub.mouse_down(0.0, true), ScrubEffect::PauseForDrag);
        assert!(matches!(
            scrub.state(),
            ScrubState::DraggingWhilePausedForDrag(DragSession {
                was_playing_before_drag: true,
                ..
            })
        ));
        assert_eq!(scrub.mouse_up(), ScrubEffect::ResumeAfterDrag);
        assert_eq!(*scrub.state(), ScrubState::Idle);
        assert_eq!(scrub.mouse_up(), ScrubEffect::None);
    }

    #[test]
    fn test_newer_mouse_down_wins() {
        let mut scrub = ScrubController::new();
        scrub.mouse_down(0.0, true);
        // Playback is now paused; a second press sees it stopped
        assert_eq!(scrub.mouse_down(50.0, false), ScrubEffect::None);
        assert!(matches!(scrub.state(), ScrubState::Dragging(_)));
        assert_eq!(scrub.mouse_up(), ScrubEffect::None);
    }
}
