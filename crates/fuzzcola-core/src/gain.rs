//! Gain stage with a dB interface and a short linear ramp.
//!
//! The pedal has two of these: the sustain pre-gain in front of the clippers
//! and the volume control at the end of the chain. Both are set once per
//! block, in dB, and ramp linearly to the new value over [`GAIN_RAMP_MS`] so
//! block-boundary changes never click.
//!
//! # Usage
//!
//! ```rust
//! use fuzzcola_core::{Effect, GainStage};
//!
//! let mut stage = GainStage::new(48000.0, 0.0);
//! stage.set_gain_db(6.0);
//! stage.snap();
//! assert!((stage.process(0.5) - 0.9976).abs() < 1e-3);
//! ```
//!
//! # Design
//!
//! The stage multiplies by a linear gain internally; the ramp runs in the
//! linear domain, matching how the target is applied to samples.

use crate::{Effect, LinearRamp, db_to_linear, linear_to_db};

/// Ramp duration used by both gain stages, in milliseconds.
pub const GAIN_RAMP_MS: f32 = 1.0;

/// Linear gain stage controlled in decibels.
#[derive(Debug, Clone)]
pub struct GainStage {
    gain: LinearRamp,
}

impl GainStage {
    /// Create a gain stage at `gain_db`, already settled.
    pub fn new(sample_rate: f32, gain_db: f32) -> Self {
        Self {
            gain: LinearRamp::new(db_to_linear(gain_db), sample_rate, GAIN_RAMP_MS),
        }
    }

    /// Set the target gain in dB. The stage ramps there over [`GAIN_RAMP_MS`].
    #[inline]
    pub fn set_gain_db(&mut self, db: f32) {
        self.gain.set_target(db_to_linear(db));
    }

    /// Target gain in dB.
    #[inline]
    pub fn gain_db(&self) -> f32 {
        linear_to_db(self.gain.target())
    }

    /// Target gain as a linear factor.
    #[inline]
    pub fn target_linear(&self) -> f32 {
        self.gain.target()
    }

    /// Gain currently applied (mid-ramp values included).
    #[inline]
    pub fn current_linear(&self) -> f32 {
        self.gain.get()
    }

    /// Whether the ramp has reached its target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.gain.is_settled()
    }

    /// Jump straight to the target gain.
    pub fn snap(&mut self) {
        self.gain.snap_to_target();
    }
}

impl Effect for GainStage {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        input * self.gain.advance()
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        if self.gain.is_settled() {
            let gain = self.gain.get();
            for sample in buffer.iter_mut() {
                *sample *= gain;
            }
        } else {
            for sample in buffer.iter_mut() {
                *sample *= self.gain.advance();
            }
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.gain.set_sample_rate(sample_rate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            ramp_samples = self.gain.ramp_length(),
            "gain ramp resized"
        );
    }

    fn reset(&mut self) {
        self.gain.snap_to_target();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_db_roundtrip() {
        let mut stage = GainStage::new(48000.0, 0.0);
        stage.set_gain_db(-6.0);
        let db = stage.gain_db();
        assert!((db - (-6.0)).abs() < 0.01, "Expected -6.0, got {db}");
    }

    #[test]
    fn ramp_takes_one_millisecond() {
        let mut stage = GainStage::new(48000.0, 0.0);
        stage.set_gain_db(20.0);

        let mut block = [1.0f32; 48];
        stage.process_block_inplace(&mut block);

        assert!(block[0] > 1.0 && block[0] < 1.5, "First sample should barely move: {}", block[0]);
        for pair in block.windows(2) {
            assert!(pair[1] > pair[0], "Ramp must rise monotonically");
        }
        assert!((block[47] - 10.0).abs() < 1e-4, "Ramp must land on target: {}", block[47]);
        assert!(stage.is_settled());
    }

    #[test]
    fn settled_block_is_constant_gain() {
        let mut stage = GainStage::new(44100.0, -20.0);
        let mut block = [0.5f32; 16];
        stage.process_block_inplace(&mut block);
        for &s in &block {
            assert!((s - 0.05).abs() < 1e-6);
        }
    }

    #[test]
    fn reset_snaps_ramp() {
        let mut stage = GainStage::new(48000.0, 0.0);
        stage.set_gain_db(12.0);
        stage.reset();
        assert!(stage.is_settled());
        assert_eq!(stage.current_linear(), stage.target_linear());
    }

    #[test]
    fn block_and_sample_paths_agree() {
        let mut a = GainStage::new(48000.0, 0.0);
        let mut b = GainStage::new(48000.0, 0.0);
        a.set_gain_db(-12.0);
        b.set_gain_db(-12.0);

        let mut block = [0.3f32; 100];
        a.process_block_inplace(&mut block);
        for &s in &block {
            assert_eq!(s, b.process(0.3));
        }
    }
}
