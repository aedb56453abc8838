//! Audio player capability consumed by the timeline engine
//!
//! The engine never decodes or outputs audio itself. It reads and writes the
//! playhead through [`AudioPlayer`] and captures a [`PlaybackState`] snapshot
//! once per frame so every derived value of that frame sees the same numbers.

/// Playback capability exposed by an audio backend
///
/// Implementations report positions in frames (one sample per channel).
/// `set_position_samples` must be visible to the next `position_samples`
/// call on the same thread.
pub trait AudioPlayer {
    /// Current playhead position in samples
    fn position_samples(&self) -> u64;

    /// Move the playhead
    fn set_position_samples(&mut self, position: u64);

    /// Clip length in samples
    fn total_samples(&self) -> u64;

    /// Clip sample rate in Hz
    fn sample_rate(&self) -> u32;

    /// Whether audio is currently running
    fn is_playing(&self) -> bool;

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback, keeping the playhead
    fn pause(&mut self);
}

/// Point-in-time view of an [`AudioPlayer`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub position_samples: u64,
    pub total_samples: u64,
    pub sample_rate: u32,
}

impl PlaybackState {
    /// Capture the player's current state
    pub fn capture<P: AudioPlayer + ?Sized>(player: &P) -> Self {
        Self {
            is_playing: player.is_playing(),
            position_samples: player.position_samples(),
            total_samples: player.total_samples(),
            sample_rate: player.sample_rate(),
        }
    }
}
