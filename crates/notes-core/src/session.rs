//! Editor session: the context object tying the timeline components together
//!
//! One session per open clip. It owns the player handle and every piece of
//! editor state, each with a single writer:
//!
//! | State            | Writer                         |
//! |------------------|--------------------------------|
//! | playhead         | ScrubController (via player)   |
//! | play/pause       | TransportController            |
//! | BPM              | BeatClock (BPM text input)     |
//! | scale            | ScrollState (scale slider)     |
//! | divisions        | DivisionState (slider)         |
//!
//! Input is applied through [`EditorSession::handle_event`]; derived values
//! are pulled once per tick by [`EditorSession::frame`], always after that
//! frame's mutations.

use serde::{Deserialize, Serialize};

use crate::playback::{AudioPlayer, PlaybackState};
use crate::timeline::{
    BeatClock, DivisionState, GridParams, GridRenderer, GridStyle, LineRenderer, OffsetSource,
    ScrollState, ScrubController, ScrubEffect, TransportController,
};
use crate::types::{MAX_BPM, MAX_DIVISIONS, MAX_SCALE_FACTOR, MIN_BPM, MIN_SCALE_FACTOR};

/// Initial editor values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// BPM used until the user types one
    pub default_bpm: u32,
    /// Grid subdivisions per measure
    pub default_divisions: u32,
    /// Canvas zoom factor (1.0 = one pixel per 100 samples)
    pub default_scale: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_bpm: 120,
            default_divisions: 4,
            default_scale: 1.0,
        }
    }
}

impl SessionConfig {
    /// Clamp values into their accepted ranges
    pub fn validate(&mut self) {
        self.default_bpm = self.default_bpm.clamp(MIN_BPM, MAX_BPM);
        self.default_divisions = self.default_divisions.clamp(1, MAX_DIVISIONS);
        if self.default_scale.is_nan() || self.default_scale < MIN_SCALE_FACTOR {
            self.default_scale = MIN_SCALE_FACTOR;
        }
        self.default_scale = self.default_scale.min(MAX_SCALE_FACTOR);
    }
}

/// Generic input delivered to the session
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Mouse button pressed on the canvas
    MouseDown { x: f32 },
    /// Mouse button released (anywhere)
    MouseUp,
    /// Zoom slider moved
    ScaleChanged(f32),
    /// Divisions slider moved
    DivisionsChanged(f32),
    /// BPM text field edited
    BpmTextChanged(String),
    /// Play/pause button clicked
    TogglePlayback,
}

/// Summary of one resolved frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineFrame {
    /// Snapshot every derived value was computed from
    pub playback: PlaybackState,
    /// Canvas sits at `-canvas_offset_px`
    pub canvas_offset_px: f32,
    pub canvas_width_px: f32,
    pub offset_source: OffsetSource,
    pub line_count: usize,
    /// Sample delta applied by an active drag this frame
    pub scrub_delta: Option<i64>,
}

pub struct EditorSession<P: AudioPlayer> {
    player: P,
    title: String,
    beat_clock: BeatClock,
    divisions: DivisionState,
    scroll: ScrollState,
    scrub: ScrubController,
    transport: TransportController,
    grid: GridRenderer,
    bpm_text: String,
}

impl<P: AudioPlayer> EditorSession<P> {
    /// Start a session over an already loaded clip
    pub fn new(
        player: P,
        title: impl Into<String>,
        config: &SessionConfig,
        style: GridStyle,
    ) -> Self {
        let mut config = config.clone();
        config.validate();

        let total_samples = player.total_samples();
        let beat_clock = BeatClock::new(config.default_bpm, player.sample_rate());
        let title = title.into();

        log::info!(
            "EditorSession: '{}' ({} samples @ {}Hz), bpm={}, divisions={}, scale={}",
            title,
            total_samples,
            player.sample_rate(),
            beat_clock.bpm(),
            config.default_divisions,
            config.default_scale
        );

        Self {
            bpm_text: beat_clock.bpm().to_string(),
            beat_clock,
            divisions: DivisionState::new(config.default_divisions),
            scroll: ScrollState::with_scale(total_samples, config.default_scale),
            scrub: ScrubController::new(),
            transport: TransportController::new(),
            grid: GridRenderer::new(style),
            player,
            title,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bpm(&self) -> u32 {
        self.beat_clock.bpm()
    }

    /// Text the BPM field should display
    pub fn bpm_text(&self) -> &str {
        &self.bpm_text
    }

    pub fn unit_beat_samples(&self) -> u64 {
        self.beat_clock.unit_beat_samples()
    }

    pub fn divisions_per_measure(&self) -> u32 {
        self.divisions.get()
    }

    pub fn scale_factor(&self) -> f32 {
        self.scroll.scale_factor()
    }

    pub fn canvas_width_px(&self) -> f32 {
        self.scroll.canvas_width_px()
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    pub fn transport_label(&self) -> &'static str {
        self.transport.label()
    }

    pub fn is_dragging(&self) -> bool {
        self.scrub.is_dragging()
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::MouseDown { x } => {
                // The player may have stopped since the last frame
                self.transport.sync(&self.player);
                let effect = self.scrub.mouse_down(x, self.transport.is_playing());
                self.apply_scrub_effect(effect);
            }
            EditorEvent::MouseUp => {
                let effect = self.scrub.mouse_up();
                self.apply_scrub_effect(effect);
            }
            EditorEvent::ScaleChanged(scale) => {
                let total = self.player.total_samples();
                self.scroll.set_scale(scale, total);
            }
            EditorEvent::DivisionsChanged(value) => {
                let divisions = self.divisions.set_from_slider(value);
                log::debug!("EditorSession: divisions={}", divisions);
            }
            EditorEvent::BpmTextChanged(text) => {
                self.bpm_text = text;
                if let Some(bpm) = self.beat_clock.set_bpm_text(&self.bpm_text) {
                    self.bpm_text = bpm.to_string();
                }
            }
            EditorEvent::TogglePlayback => {
                self.transport.toggle(&mut self.player);
            }
        }
    }

    fn apply_scrub_effect(&mut self, effect: ScrubEffect) {
        match effect {
            ScrubEffect::None => {}
            ScrubEffect::PauseForDrag => {
                self.transport.set_playing(false, &mut self.player);
            }
            ScrubEffect::ResumeAfterDrag => {
                self.transport.set_playing(true, &mut self.player);
            }
        }
    }

    /// Resolve one frame
    ///
    /// `cursor_x` is the current mouse x, if known. Drag deltas are applied
    /// first, then the snapshot is taken and offset and grid are derived
    /// from it.
    pub fn frame<R: LineRenderer + ?Sized>(
        &mut self,
        cursor_x: Option<f32>,
        renderer: &mut R,
    ) -> TimelineFrame {
        let scrub_delta = match cursor_x {
            Some(x) => self
                .scrub
                .drag_frame(x, self.scroll.canvas_width_px(), &mut self.player),
            None => None,
        };

        self.transport.sync(&self.player);

        let playback = PlaybackState::capture(&self.player);
        self.beat_clock.set_sample_rate(playback.sample_rate);

        let canvas_offset_px = self.scroll.reconcile(&playback);
        let params = GridParams {
            total_samples: playback.total_samples,
            unit_beat_samples: self.beat_clock.unit_beat_samples(),
            divisions_per_measure: self.divisions.get(),
            canvas_width_px: self.scroll.canvas_width_px(),
            position_samples: playback.position_samples,
        };
        let line_count = self.grid.render(&params, renderer);

        TimelineFrame {
            playback,
            canvas_offset_px,
            canvas_width_px: self.scroll.canvas_width_px(),
            offset_source: self.scroll.last_source(),
            line_count,
            scrub_delta,
        }
    }

    /// Current editor values as session defaults
    pub fn to_config(&self) -> SessionConfig {
        SessionConfig {
            default_bpm: self.beat_clock.bpm(),
            default_divisions: self.divisions.get(),
            default_scale: self.scroll.scale_factor(),
        }
    }
}
