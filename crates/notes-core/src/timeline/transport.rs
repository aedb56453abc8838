//! Play/pause toggle and its button label
//!
//! Side effects fire only on an actual state change, so the scrub controller
//! can pause and resume through here without double audio calls.

use crate::playback::AudioPlayer;

/// Label shown while paused
pub const PLAY_LABEL: &str = "Play";

/// Label shown while playing
pub const PAUSE_LABEL: &str = "Pause";

#[derive(Debug, Clone)]
pub struct TransportController {
    is_playing: bool,
    label: &'static str,
}

impl Default for TransportController {
    fn default() -> Self {
        Self {
            is_playing: false,
            label: PLAY_LABEL,
        }
    }
}

impl TransportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Flip between playing and paused
    pub fn toggle<P: AudioPlayer + ?Sized>(&mut self, player: &mut P) -> bool {
        self.set_playing(!self.is_playing, player)
    }

    /// Request a playback state
    ///
    /// Returns `false` (and touches nothing) when already in that state.
    pub fn set_playing<P: AudioPlayer + ?Sized>(&mut self, playing: bool, player: &mut P) -> bool {
        if playing == self.is_playing {
            return false;
        }
        self.is_playing = playing;
        if playing {
            player.play();
            self.label = PAUSE_LABEL;
        } else {
            player.pause();
            self.label = PLAY_LABEL;
        }
        log::debug!("TransportController: playing={}", playing);
        true
    }

    /// Fall back to paused when the player stopped on its own
    ///
    /// No `pause()` is issued. Returns `true` if the state changed.
    pub fn sync<P: AudioPlayer + ?Sized>(&mut self, player: &P) -> bool {
        if self.is_playing && !player.is_playing() {
            log::debug!("TransportController: player stopped, returning to paused");
            self.is_playing = false;
            self.label = PLAY_LABEL;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlayer;

    #[test]
    fn test_toggle_updates_label_and_player() {
        let mut player = FakePlayer::new(44100, 44100);
        let mut transport = TransportController::new();
        assert_eq!(transport.label(), PLAY_LABEL);

        assert!(transport.toggle(&mut player));
        assert!(player.playing);
        assert_eq!(transport.label(), PAUSE_LABEL);

        assert!(transport.toggle(&mut player));
        assert!(!player.playing);
        assert_eq!(transport.label(), PLAY_LABEL);
        assert_eq!((player.play_calls, player.pause_calls), (1, 1));
    }

    #[test]
    fn test_duplicate_requests_have_no_effect() {
        let mut player = FakePlayer::new(44100, 44100);
        let mut transport = TransportController::new();
        assert!(!transport.set_playing(false, &mut player));
        assert!(transport.set_playing(true, &mut player));
        assert!(!transport.set_playing(true, &mut player));
        assert_eq!((player.play_calls, player.pause_calls), (1, 0));
    }

    #[test]
    fn test_sync_after_clip_end() {
        let mut player = FakePlayer::new(100, 44100);
        let mut transport = TransportController::new();
        transport.toggle(&mut player);
        player.advance(1000);
        assert!(transport.sync(&player));
        assert!(!transport.is_playing());
        assert_eq!(transport.label(), PLAY_LABEL);
        assert_eq!(player.pause_calls, 0);
        assert!(!transport.sync(&player));
    }
}
