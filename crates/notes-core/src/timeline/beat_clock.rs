//! BPM normalization and unit-beat derivation
//!
//! The grid subdivision length is derived from the BPM and the clip sample
//! rate: `floor(sample_rate * 60 / bpm)`. BPM text is normalized before it
//! gets here, so the division can never see a zero BPM.

use std::num::IntErrorKind;

use crate::types::{MAX_BPM, MAX_DIVISIONS, MIN_BPM};

/// Normalize BPM text field input
///
/// Empty input counts as `1`. Anything that does not parse as an integer
/// also counts as `1`, except for digit strings too large to represent,
/// which saturate at [`MAX_BPM`]. The result is always within
/// `[MIN_BPM, MAX_BPM]`.
pub fn parse_bpm(input: &str) -> u32 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return MIN_BPM;
    }

    let value = match trimmed.parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::from(MAX_BPM),
            _ => i64::from(MIN_BPM),
        },
    };

    value.clamp(i64::from(MIN_BPM), i64::from(MAX_BPM)) as u32
}

/// Samples spanned by one grid subdivision
///
/// Floors at 1 so callers can always divide by the result.
pub fn compute_unit_beat_samples(bpm: u32, sample_rate: u32) -> u64 {
    let bpm = u64::from(bpm.max(MIN_BPM));
    (u64::from(sample_rate) * 60 / bpm).max(1)
}

/// Current BPM plus its derived unit-beat length
#[derive(Debug, Clone)]
pub struct BeatClock {
    bpm: u32,
    sample_rate: u32,
    unit_beat_samples: u64,
}

impl BeatClock {
    /// Create a clock; `bpm` is clamped into range
    pub fn new(bpm: u32, sample_rate: u32) -> Self {
        let bpm = bpm.clamp(MIN_BPM, MAX_BPM);
        Self {
            bpm,
            sample_rate,
            unit_beat_samples: compute_unit_beat_samples(bpm, sample_rate),
        }
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn unit_beat_samples(&self) -> u64 {
        self.unit_beat_samples
    }

    /// Accept a new BPM
    ///
    /// Returns `false` without recomputing when the clamped value equals the
    /// current BPM.
    pub fn set_bpm(&mut self, bpm: u32) -> bool {
        let bpm = bpm.clamp(MIN_BPM, MAX_BPM);
        if bpm == self.bpm {
            return false;
        }
        self.bpm = bpm;
        self.unit_beat_samples = compute_unit_beat_samples(self.bpm, self.sample_rate);
        log::debug!(
            "BeatClock: bpm={} unit_beat_samples={}",
            self.bpm,
            self.unit_beat_samples
        );
        true
    }

    /// Normalize BPM text and accept the result
    ///
    /// Returns the new BPM when it changed.
    pub fn set_bpm_text(&mut self, input: &str) -> Option<u32> {
        let bpm = parse_bpm(input);
        self.set_bpm(bpm).then_some(bpm)
    }

    /// Track a sample-rate change (e.g. a different clip)
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        if sample_rate != self.sample_rate {
            self.sample_rate = sample_rate;
            self.unit_beat_samples = compute_unit_beat_samples(self.bpm, self.sample_rate);
        }
    }
}

/// Grid subdivisions per measure, set by a slider
///
/// Always within `1..=MAX_DIVISIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionState {
    divisions_per_measure: u32,
}

impl DivisionState {
    pub fn new(divisions_per_measure: u32) -> Self {
        Self {
            divisions_per_measure: divisions_per_measure.clamp(1, MAX_DIVISIONS),
        }
    }

    pub fn get(&self) -> u32 {
        self.divisions_per_measure
    }

    /// Apply a slider value (floored, then clamped)
    pub fn set_from_slider(&mut self, value: f32) -> u32 {
        // NaN casts to 0 and is then raised to 1
        let floored = value.floor().max(0.0) as u32;
        self.divisions_per_measure = floored.clamp(1, MAX_DIVISIONS);
        self.divisions_per_measure
    }
}

impl Default for DivisionState {
    fn default() -> Self {
        Self::new(4)
    }
}
