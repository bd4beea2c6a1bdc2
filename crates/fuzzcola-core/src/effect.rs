//! Core Effect trait.
//!
//! Every stage of the pedal's signal chain implements [`Effect`]: the gain
//! stages, the fixed filters, the two waveshapers and the tone stack.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. The pedal runs one
//!   independent chain per channel (dual-mono), so stages never see more than
//!   one channel.
//!
//! - **Block-first**: The chain pushes a whole block through stage N before
//!   stage N+1 starts, so [`Effect::process_block_inplace`] is the hot path.
//!
//! - **No allocations**: All methods are designed to be called in real-time
//!   audio contexts with zero heap allocations.

/// Core trait for all processing stages.
///
/// # Example
///
/// ```rust
/// use fuzzcola_core::Effect;
///
/// struct Invert;
///
/// impl Effect for Invert {
///     fn process(&mut self, input: f32) -> f32 {
///         -input
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut stage = Invert;
/// let mut block = [0.25, -0.5];
/// stage.process_block_inplace(&mut block);
/// assert_eq!(block, [-0.25, 0.5]);
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// For stages with internal state (filters, ramps), this advances the
    /// state by one sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// # Panics
    /// Default implementation debug-asserts `input.len() == output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Stages recalculate every sample-rate-dependent coefficient here
    /// (filter coefficients, ramp lengths). Never called from the audio path.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state.
    ///
    /// Clears filter history without changing parameters.
    fn reset(&mut self);

    /// Report processing latency in samples.
    ///
    /// Default returns 0 (no latency).
    fn latency_samples(&self) -> usize {
        0
    }
}
