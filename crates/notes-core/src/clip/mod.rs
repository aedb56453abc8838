//! Audio clip loading
//!
//! Decodes a WAV file into stereo frames for the preview player. Loading is
//! a precondition of the editor: a session is only created once a clip is in
//! memory.

mod error;

pub use error::{ClipError, ClipResult};

use std::path::Path;

use crate::types::StereoSample;

/// Title used when the file name can't provide one
pub const FALLBACK_TITLE: &str = "Test";

/// A decoded clip held in memory
#[derive(Debug, Clone)]
pub struct AudioClip {
    frames: Vec<StereoSample>,
    sample_rate: u32,
    title: String,
}

impl AudioClip {
    /// Build a clip from already decoded frames
    pub fn from_frames(
        frames: Vec<StereoSample>,
        sample_rate: u32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            frames,
            sample_rate,
            title: title.into(),
        }
    }

    /// Decode a WAV file
    ///
    /// Integer (8-32 bit) and 32-bit float data are supported. Mono is
    /// duplicated to both channels; channels beyond the first two are
    /// dropped.
    pub fn load<P: AsRef<Path>>(path: P) -> ClipResult<Self> {
        let path = path.as_ref();
        let mut reader = hound::WavReader::open(path).map_err(|source| ClipError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let spec = reader.spec();
        let channels = usize::from(spec.channels.max(1));

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => {
                if spec.bits_per_sample != 32 {
                    return Err(ClipError::UnsupportedFormat {
                        bits: spec.bits_per_sample,
                        format: "float",
                    });
                }
                reader.samples::<f32>().collect::<Result<_, _>>()?
            }
            hound::SampleFormat::Int => {
                if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                    return Err(ClipError::UnsupportedFormat {
                        bits: spec.bits_per_sample,
                        format: "int",
                    });
                }
                let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<Result<_, _>>()?
            }
        };

        let frames: Vec<StereoSample> = interleaved
            .chunks_exact(channels)
            .map(|frame| match frame {
                [mono] => StereoSample::mono(*mono),
                [left, right, ..] => StereoSample::new(*left, *right),
                [] => StereoSample::silence(),
            })
            .collect();

        if frames.is_empty() {
            return Err(ClipError::Empty(path.to_path_buf()));
        }

        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());

        log::info!(
            "AudioClip: loaded '{}' - {} frames, {} channels, {}Hz, {}-bit {:?}",
            title,
            frames.len(),
            spec.channels,
            spec.sample_rate,
            spec.bits_per_sample,
            spec.sample_format
        );

        Ok(Self {
            frames,
            sample_rate: spec.sample_rate,
            title,
        })
    }

    pub fn frames(&self) -> &[StereoSample] {
        &self.frames
    }

    /// Clip length in samples (frames)
    pub fn len(&self) -> u64 {
        self.frames.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, spec: hound::WavSpec, samples: &[i32]) {
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_load_stereo_16_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        write_wav(&path, spec, &[16384, -16384, 0, 32767]);

        let clip = AudioClip::load(&path).unwrap();
        assert_eq!(clip.len(), 2);
        assert_eq!(clip.sample_rate(), 44100);
        assert_eq!(clip.title(), "song");
        assert!((clip.frames()[0].left - 0.5).abs() < 1e-6);
        assert!((clip.frames()[0].right + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_load_mono_duplicates_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        write_wav(&path, spec, &[8192, -8192, 0]);

        let clip = AudioClip::load(&path).unwrap();
        assert_eq!(clip.len(), 3);
        assert_eq!(clip.frames()[0].left, clip.frames()[0].right);
    }

    #[test]
    fn test_load_empty_clip_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        write_wav(&path, spec, &[]);

        assert!(matches!(AudioClip::load(&path), Err(ClipError::Empty(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = AudioClip::load(dir.path().join("missing.wav"));
        assert!(matches!(result, Err(ClipError::Open { .. })));
    }
}
