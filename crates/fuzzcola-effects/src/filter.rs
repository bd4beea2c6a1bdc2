//! Fixed-frequency filter stages.
//!
//! The chain has two filters whose corner never moves: a 30 Hz high-pass in
//! front of the clippers and a 5.5 kHz first-order low-pass after the tone
//! stack. Their coefficients depend only on the sample rate, so they are
//! computed in [`FixedFilter::new`] and [`Effect::set_sample_rate`] and never
//! on the audio path.

use fuzzcola_core::{Biquad, Effect, first_order_lowpass_coefficients, highpass_coefficients};

/// Response of a [`FixedFilter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixedResponse {
    /// Second-order high-pass.
    HighPass {
        /// Cutoff in Hz.
        frequency: f32,
        /// Q (0.7071 for Butterworth).
        q: f32,
    },
    /// First-order (6 dB/oct) low-pass.
    FirstOrderLowPass {
        /// Cutoff in Hz.
        frequency: f32,
    },
}

impl FixedResponse {
    /// Cutoff frequency in Hz.
    pub fn frequency(&self) -> f32 {
        match *self {
            FixedResponse::HighPass { frequency, .. }
            | FixedResponse::FirstOrderLowPass { frequency } => frequency,
        }
    }
}

/// Biquad stage with a corner frequency fixed at construction.
///
/// # Example
///
/// ```rust
/// use fuzzcola_effects::{FixedFilter, FixedResponse};
/// use fuzzcola_core::Effect;
/// use core::f32::consts::FRAC_1_SQRT_2;
///
/// let butterworth = FixedResponse::HighPass { frequency: 30.0, q: FRAC_1_SQRT_2 };
/// let mut hp = FixedFilter::new(butterworth, 48000.0);
/// let mut out = 0.0;
/// for _ in 0..48000 {
///     out = hp.process(1.0);
/// }
/// assert!(out.abs() < 1e-3); // DC removed
/// ```
#[derive(Debug, Clone)]
pub struct FixedFilter {
    biquad: Biquad,
    response: FixedResponse,
    sample_rate: f32,
}

impl FixedFilter {
    /// Create the filter and compute its coefficients for `sample_rate`.
    pub fn new(response: FixedResponse, sample_rate: f32) -> Self {
        let mut filter = Self {
            biquad: Biquad::new(),
            response,
            sample_rate,
        };
        filter.update_coefficients();
        filter
    }

    /// The filter's response.
    pub fn response(&self) -> FixedResponse {
        self.response
    }

    /// Sample rate the coefficients were computed for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Normalized coefficients `(b0, b1, b2, a1, a2)`.
    pub fn coefficients(&self) -> (f32, f32, f32, f32, f32) {
        self.biquad.coefficients()
    }

    fn update_coefficients(&mut self) {
        let coefficients = match self.response {
            FixedResponse::HighPass { frequency, q } => {
                highpass_coefficients(frequency, q, self.sample_rate)
            }
            FixedResponse::FirstOrderLowPass { frequency } => {
                first_order_lowpass_coefficients(frequency, self.sample_rate)
            }
        };
        self.biquad.set_coefficient_tuple(coefficients);
    }
}

impl Effect for FixedFilter {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.biquad.process(input)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.update_coefficients();
    }

    fn reset(&mut self) {
        self.biquad.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_1_SQRT_2;

    fn sine_peak(filter: &mut FixedFilter, freq: f32, sr: f32) -> f32 {
        let n = (sr * 0.5) as usize;
        let mut peak = 0.0f32;
        for i in 0..n {
            let x = libm::sinf(2.0 * core::f32::consts::PI * freq * i as f32 / sr);
            let y = filter.process(x);
            if i > n / 2 {
                peak = peak.max(y.abs());
            }
        }
        peak
    }

    #[test]
    fn test_high_pass_corner_is_minus_3db() {
        let response = FixedResponse::HighPass { frequency: 30.0, q: FRAC_1_SQRT_2 };
        let mut hp = FixedFilter::new(response, 48000.0);
        let peak = sine_peak(&mut hp, 30.0, 48000.0);
        assert!((peak - FRAC_1_SQRT_2).abs() < 0.02, "Expected -3 dB at corner, got {peak}");
    }

    #[test]
    fn test_high_pass_passes_midrange() {
        let response = FixedResponse::HighPass { frequency: 30.0, q: FRAC_1_SQRT_2 };
        let mut hp = FixedFilter::new(response, 44100.0);
        let peak = sine_peak(&mut hp, 1000.0, 44100.0);
        assert!((peak - 1.0).abs() < 0.01, "1 kHz should pass, got {peak}");
    }

    #[test]
    fn test_low_pass_corner_is_minus_3db() {
        let mut lp = FixedFilter::new(FixedResponse::FirstOrderLowPass { frequency: 5500.0 }, 48000.0);
        let peak = sine_peak(&mut lp, 5500.0, 48000.0);
        assert!((peak - FRAC_1_SQRT_2).abs() < 0.02, "Expected -3 dB at corner, got {peak}");
    }

    #[test]
    fn test_sample_rate_change_recomputes() {
        let mut lp = FixedFilter::new(FixedResponse::FirstOrderLowPass { frequency: 5500.0 }, 44100.0);
        let before = lp.coefficients();
        lp.set_sample_rate(96000.0);
        assert_ne!(before, lp.coefficients());
        assert_eq!(lp.sample_rate(), 96000.0);

        let fresh = FixedFilter::new(FixedResponse::FirstOrderLowPass { frequency: 5500.0 }, 96000.0);
        assert_eq!(lp.coefficients(), fresh.coefficients());
    }

    #[test]
    fn test_reset_clears_history() {
        let response = FixedResponse::HighPass { frequency: 30.0, q: FRAC_1_SQRT_2 };
        let mut hp = FixedFilter::new(response, 48000.0);
        hp.process(1.0);
        hp.process(0.5);
        hp.reset();
        assert_eq!(hp.process(0.0), 0.0);
    }
}
