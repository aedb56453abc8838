//! Test doubles for the player and renderer collaborators

use crate::playback::AudioPlayer;
use crate::timeline::LineRenderer;
use crate::types::GridLine;

/// In-memory player that counts every call
#[derive(Debug, Clone, Default)]
pub struct FakePlayer {
    pub position: u64,
    pub total: u64,
    pub rate: u32,
    pub playing: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seeks: Vec<u64>,
}

impl FakePlayer {
    pub fn new(total: u64, rate: u32) -> Self {
        Self {
            total,
            rate,
            ..Self::default()
        }
    }

    /// Start with the playhead at `position` (not counted as a seek)
    pub fn at(mut self, position: u64) -> Self {
        self.position = position;
        self
    }

    pub fn seek_count(&self) -> usize {
        self.seeks.len()
    }

    /// Simulate audio running for `frames` samples, stopping on the last one
    pub fn advance(&mut self, frames: u64) {
        if !self.playing {
            return;
        }
        let end = self.position + frames;
        self.position = end.min(self.total.saturating_sub(1));
        if end >= self.total {
            self.playing = false;
        }
    }
}

impl AudioPlayer for FakePlayer {
    fn position_samples(&self) -> u64 {
        self.position
    }

    fn set_position_samples(&mut self, position: u64) {
        self.position = position;
        self.seeks.push(position);
    }

    fn total_samples(&self) -> u64 {
        self.total
    }

    fn sample_rate(&self) -> u32 {
        self.rate
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        self.play_calls += 1;
        self.playing = true;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.playing = false;
    }
}

/// Renderer that keeps the last line set it was given
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub draw_calls: usize,
    pub lines: Vec<GridLine>,
}

impl LineRenderer for RecordingRenderer {
    fn draw_lines(&mut self, lines: &[GridLine]) {
        self.draw_calls += 1;
        self.lines.clear();
        self.lines.extend_from_slice(lines);
    }
}
