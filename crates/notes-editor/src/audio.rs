//! cpal audio preview for the notes editor
//!
//! Lock-free architecture for RT-safe preview:
//! - Clips handed to the audio thread via an `rtrb` SPSC ringbuffer (UI → Audio)
//! - Position, playing and length live in shared atomics written by both sides
//! - Clip buffers are `basedrop::Shared`, so a drop on the audio thread only
//!   enqueues the buffer for the UI-side collector

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use basedrop::{Collector, Shared};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};
use notes_core::clip::AudioClip;
use notes_core::AudioPlayer;
use thiserror::Error;

/// Errors starting the preview stream
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("No audio output device found")]
    NoDevice,

    #[error("Failed to get device config: {0}")]
    Config(String),

    #[error("Failed to build audio stream: {0}")]
    StreamBuild(String),

    #[error("Failed to start audio stream: {0}")]
    StreamPlay(String),
}

/// Commands sent from UI to audio thread
pub enum PreviewCommand {
    /// Replace the clip being previewed
    LoadClip(Box<Shared<AudioClip>>),
}

/// Create a preview command channel with 16-command capacity
pub fn preview_command_channel() -> (rtrb::Producer<PreviewCommand>, rtrb::Consumer<PreviewCommand>)
{
    rtrb::RingBuffer::new(16)
}

/// Command sender for UI thread
pub struct CommandSender {
    producer: rtrb::Producer<PreviewCommand>,
}

impl CommandSender {
    /// Returns the command back if the queue is full
    pub fn send(&mut self, cmd: PreviewCommand) -> Result<(), PreviewCommand> {
        self.producer.push(cmd).map_err(|e| match e {
            rtrb::PushError::Full(value) => value,
        })
    }
}

/// Playback state shared between UI and audio thread
#[derive(Debug, Default)]
pub struct PreviewAtomics {
    /// Current playback position in samples
    pub position: AtomicU64,
    pub playing: AtomicBool,
    /// Clip length in samples
    pub length: AtomicU64,
}

impl PreviewAtomics {
    pub fn position(&self) -> u64 {
        self.position.load(Ordering::Acquire)
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    pub fn length(&self) -> u64 {
        self.length.load(Ordering::Acquire)
    }
}

/// UI side of the preview: the editor's [`AudioPlayer`]
pub struct PreviewPlayer {
    /// None when no audio device is available
    command_sender: Option<CommandSender>,
    atomics: Arc<PreviewAtomics>,
    /// Clip sample rate; the timeline works in clip samples
    sample_rate: u32,
    collector: Collector,
}

impl PreviewPlayer {
    fn new(producer: rtrb::Producer<PreviewCommand>, atomics: Arc<PreviewAtomics>) -> Self {
        Self {
            command_sender: Some(CommandSender { producer }),
            atomics,
            sample_rate: 0,
            collector: Collector::new(),
        }
    }

    /// Player without an audio stream
    ///
    /// Seeking and the clip length still work so the timeline stays usable;
    /// `play()` is ignored.
    pub fn disconnected() -> Self {
        Self {
            command_sender: None,
            atomics: Arc::new(PreviewAtomics::default()),
            sample_rate: 0,
            collector: Collector::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.command_sender.is_some()
    }

    /// Hand a clip to the audio thread
    ///
    /// The length and position atomics are updated before returning so the
    /// caller sees the new clip immediately. If the command queue is full the
    /// previous clip stays loaded and playback is paused.
    pub fn load_clip(&mut self, clip: AudioClip) {
        let length = clip.len();
        let sample_rate = clip.sample_rate();
        self.atomics.playing.store(false, Ordering::Release);

        if let Some(ref mut sender) = self.command_sender {
            let shared = Shared::new(&self.collector.handle(), clip);
            if sender.send(PreviewCommand::LoadClip(Box::new(shared))).is_err() {
                log::warn!("PreviewPlayer: command queue full, clip not sent");
                return;
            }
            log::info!("PreviewPlayer: clip load command sent, {} samples", length);
        }

        self.sample_rate = sample_rate;
        self.atomics.position.store(0, Ordering::Release);
        self.atomics.length.store(length, Ordering::Release);
    }

    /// Free clip buffers the audio thread has let go of
    pub fn collect(&mut self) {
        self.collector.collect();
    }
}

impl AudioPlayer for PreviewPlayer {
    fn position_samples(&self) -> u64 {
        self.atomics.position()
    }

    fn set_position_samples(&mut self, position: u64) {
        let position = position.min(self.atomics.length().saturating_sub(1));
        self.atomics.position.store(position, Ordering::Release);
    }

    fn total_samples(&self) -> u64 {
        self.atomics.length()
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn is_playing(&self) -> bool {
        self.atomics.is_playing()
    }

    fn play(&mut self) {
        if !self.is_connected() {
            log::debug!("PreviewPlayer: no audio stream, play ignored");
            return;
        }
        if self.atomics.position() + 1 >= self.atomics.length() {
            log::debug!("PreviewPlayer: at clip end, play ignored");
            return;
        }
        self.atomics.playing.store(true, Ordering::Release);
    }

    fn pause(&mut self) {
        self.atomics.playing.store(false, Ordering::Release);
    }
}

/// Audio thread side: owns the clip and renders it
pub struct PreviewProcessor {
    command_rx: rtrb::Consumer<PreviewCommand>,
    atomics: Arc<PreviewAtomics>,
    clip: Option<Shared<AudioClip>>,
}

impl PreviewProcessor {
    fn new(command_rx: rtrb::Consumer<PreviewCommand>, atomics: Arc<PreviewAtomics>) -> Self {
        Self {
            command_rx,
            atomics,
            clip: None,
        }
    }

    fn process_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.pop() {
            match cmd {
                PreviewCommand::LoadClip(clip) => self.clip = Some(*clip),
            }
        }
    }

    /// Fill one interleaved output buffer
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        self.process_commands();
        let channels = channels.max(1);

        let clip = match self.clip.as_ref() {
            Some(clip) if self.atomics.is_playing() => clip,
            _ => {
                out.fill(0.0);
                return;
            }
        };

        let frames = clip.frames();
        let len = frames.len() as u64;
        let last = len.saturating_sub(1);
        let start = self.atomics.position();
        let mut pos = start.min(last);

        for frame in out.chunks_mut(channels) {
            frame.fill(0.0);
            if pos < len {
                let sample = frames[pos as usize];
                frame[0] = sample.left;
                if channels > 1 {
                    frame[1] = sample.right;
                }
                pos += 1;
            }
        }

        // A failed exchange means the UI seeked meanwhile; its value wins
        let advanced = self
            .atomics
            .position
            .compare_exchange(start, pos.min(last), Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if advanced && pos >= len {
            let _ = self
                .atomics
                .playing
                .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire);
        }
    }
}

/// Keeps the cpal stream alive until dropped
pub struct PreviewStreamHandle {
    _stream: Stream,
    pub device_sample_rate: u32,
}

/// Open the default output device and start the preview stream
///
/// `preferred_sample_rate` is the clip's rate; if the device can't run at it
/// the device's maximum is used and playback pitch will be off.
pub fn start_preview_stream(
    preferred_sample_rate: u32,
) -> Result<(PreviewPlayer, PreviewStreamHandle), PlayerError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(PlayerError::NoDevice)?;
    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    log::info!("Using audio device: {}", device_name);

    let stream_config = output_config(&device, preferred_sample_rate)?;
    let channels = usize::from(stream_config.channels);
    let device_sample_rate = stream_config.sample_rate.0;
    log::info!(
        "Audio config: {} channels, {}Hz",
        stream_config.channels,
        device_sample_rate
    );

    let (producer, consumer) = preview_command_channel();
    let atomics = Arc::new(PreviewAtomics::default());
    let mut processor = PreviewProcessor::new(consumer, atomics.clone());

    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                processor.render(data, channels);
            },
            move |err| {
                log::error!("Preview audio stream error: {}", err);
            },
            None,
        )
        .map_err(|e| PlayerError::StreamBuild(e.to_string()))?;

    stream
        .play()
        .map_err(|e| PlayerError::StreamPlay(e.to_string()))?;

    log::info!("Preview stream started");

    Ok((
        PreviewPlayer::new(producer, atomics),
        PreviewStreamHandle {
            _stream: stream,
            device_sample_rate,
        },
    ))
}

/// Prefer f32 stereo at the requested rate, then any stereo, then anything
fn output_config(
    device: &cpal::Device,
    target_sample_rate: u32,
) -> Result<StreamConfig, PlayerError> {
    let supported: Vec<_> = device
        .supported_output_configs()
        .map_err(|e| PlayerError::Config(e.to_string()))?
        .collect();

    let supports_rate = |c: &cpal::SupportedStreamConfigRange| {
        target_sample_rate >= c.min_sample_rate().0 && target_sample_rate <= c.max_sample_rate().0
    };

    let best = supported
        .iter()
        .filter(|c| c.sample_format() == SampleFormat::F32)
        .filter(|c| c.channels() >= 2)
        .find(|c| supports_rate(*c))
        .or_else(|| {
            supported
                .iter()
                .filter(|c| c.sample_format() == SampleFormat::F32)
                .find(|c| c.channels() >= 2)
        })
        .or_else(|| supported.first())
        .ok_or_else(|| PlayerError::Config("No supported output configurations".to_string()))?;

    let sample_rate = if supports_rate(best) {
        cpal::SampleRate(target_sample_rate)
    } else {
        let fallback = best.max_sample_rate();
        log::warn!(
            "Audio device doesn't support {}Hz, using {}Hz (preview pitch will be off)",
            target_sample_rate,
            fallback.0
        );
        fallback
    };

    Ok(best.clone().with_sample_rate(sample_rate).config())
}
