//! Biquad filter section.
//!
//! Provides a generic second-order IIR filter plus the coefficient designs the
//! pedal needs: a Butterworth high-pass, a first-order low-pass (stored with
//! `b2 = a2 = 0`), and low/high shelving filters for the tone stack.
//!
//! Second-order designs use the RBJ Audio EQ Cookbook formulas; the
//! first-order low-pass uses the bilinear transform with frequency
//! prewarping.

use crate::flush_denormal;
use core::f32::consts::PI;
use libm::{cosf, sinf, sqrtf, tanf};

/// Unnormalized coefficient set `(b0, b1, b2, a0, a1, a2)`.
pub type Coefficients = (f32, f32, f32, f32, f32, f32);

/// Highest design frequency as a fraction of the sample rate.
///
/// Corners at or past Nyquist fold back and can put a pole outside the unit
/// circle, so every design pulls its corner below this limit.
pub const MAX_CORNER_RATIO: f32 = 0.45;

/// Keep a design frequency inside `2 Hz ..= MAX_CORNER_RATIO * sample_rate`.
#[inline]
fn design_frequency(frequency: f32, sample_rate: f32) -> f32 {
    frequency.min(MAX_CORNER_RATIO * sample_rate).max(2.0)
}

/// Second-order IIR section with its own history.
///
/// Difference equation (Direct Form I):
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
#[derive(Debug, Clone)]
pub struct Biquad {
    /// Feedforward coefficients
    b0: f32,
    b1: f32,
    b2: f32,

    /// Feedback coefficients (normalized by a0)
    a1: f32,
    a2: f32,

    /// Input delay line: x[n-1], x[n-2]
    x1: f32,
    x2: f32,

    /// Output delay line: y[n-1], y[n-2]
    y1: f32,
    y2: f32,
}

impl Biquad {
    /// Unity passthrough with cleared history.
    ///
    /// `b0 = 1`, all other taps zero.
    pub fn new() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Load unnormalized coefficients.
    ///
    /// Normalizes by `a0` internally. Filter history is left untouched, so
    /// coefficients can be swapped between blocks without a discontinuity.
    pub fn set_coefficients(&mut self, b0: f32, b1: f32, b2: f32, a0: f32, a1: f32, a2: f32) {
        let a0_inv = 1.0 / a0;
        self.b0 = b0 * a0_inv;
        self.b1 = b1 * a0_inv;
        self.b2 = b2 * a0_inv;
        self.a1 = a1 * a0_inv;
        self.a2 = a2 * a0_inv;
    }

    /// Sets coefficients from a tuple returned by one of the design functions.
    pub fn set_coefficient_tuple(&mut self, coefficients: Coefficients) {
        let (b0, b1, b2, a0, a1, a2) = coefficients;
        self.set_coefficients(b0, b1, b2, a0, a1, a2);
    }

    /// Returns the normalized coefficients `(b0, b1, b2, a1, a2)`.
    pub fn coefficients(&self) -> (f32, f32, f32, f32, f32) {
        (self.b0, self.b1, self.b2, self.a1, self.a2)
    }

    /// Filter one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        let output = flush_denormal(output);

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clears the filter state (delay lines) without changing coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}

/// RBJ cookbook high-pass.
///
/// With `q = 0.7071` this is a second-order Butterworth high-pass.
///
/// # Arguments
///
/// * `frequency` - -3 dB corner (Hz)
/// * `q` - Q factor
/// * `sample_rate` - Hz
pub fn highpass_coefficients(frequency: f32, q: f32, sample_rate: f32) -> Coefficients {
    let omega = 2.0 * PI * design_frequency(frequency, sample_rate) / sample_rate;
    let cos_omega = cosf(omega);
    let sin_omega = sinf(omega);
    let alpha = sin_omega / (2.0 * q);

    let b0 = (1.0 + cos_omega) / 2.0;
    let b1 = -(1.0 + cos_omega);
    let b2 = (1.0 + cos_omega) / 2.0;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    (b0, b1, b2, a0, a1, a2)
}

/// Calculates first-order (6 dB/oct) low-pass coefficients.
///
/// Bilinear transform of `H(s) = wc / (s + wc)` with the cutoff prewarped,
/// so the -3 dB point lands exactly on `frequency` (limited to
/// [`MAX_CORNER_RATIO`] of the sample rate). The second-order terms are zero.
pub fn first_order_lowpass_coefficients(frequency: f32, sample_rate: f32) -> Coefficients {
    let n = tanf(PI * design_frequency(frequency, sample_rate) / sample_rate);

    let b0 = n;
    let b1 = n;
    let a0 = n + 1.0;
    let a1 = n - 1.0;

    (b0, b1, 0.0, a0, a1, 0.0)
}

/// Calculates low-shelf coefficients using the RBJ cookbook formula.
///
/// Frequencies below `frequency` are scaled by `gain`; the band above is
/// left at unity.
///
/// # Arguments
///
/// * `frequency` - Shelf corner frequency in Hz
/// * `q` - Shelf slope Q (0.7071 for the steepest monotonic slope)
/// * `gain` - Linear gain factor of the shelf (not dB)
/// * `sample_rate` - Hz
pub fn low_shelf_coefficients(frequency: f32, q: f32, gain: f32, sample_rate: f32) -> Coefficients {
    let (a, cos_omega, beta) = shelf_terms(frequency, q, gain, sample_rate);
    let a_minus_1 = a - 1.0;
    let a_plus_1 = a + 1.0;
    let a_minus_1_cos = a_minus_1 * cos_omega;

    let b0 = a * (a_plus_1 - a_minus_1_cos + beta);
    let b1 = a * 2.0 * (a_minus_1 - a_plus_1 * cos_omega);
    let b2 = a * (a_plus_1 - a_minus_1_cos - beta);
    let a0 = a_plus_1 + a_minus_1_cos + beta;
    let a1 = -2.0 * (a_minus_1 + a_plus_1 * cos_omega);
    let a2 = a_plus_1 + a_minus_1_cos - beta;

    (b0, b1, b2, a0, a1, a2)
}

/// Calculates high-shelf coefficients using the RBJ cookbook formula.
///
/// Frequencies above `frequency` are scaled by `gain`; the band below is
/// left at unity.
///
/// # Arguments
///
/// * `frequency` - Shelf corner frequency in Hz
/// * `q` - Shelf slope Q
/// * `gain` - Linear gain factor of the shelf (not dB)
/// * `sample_rate` - Hz
pub fn high_shelf_coefficients(frequency: f32, q: f32, gain: f32, sample_rate: f32) -> Coefficients {
    let (a, cos_omega, beta) = shelf_terms(frequency, q, gain, sample_rate);
    let a_minus_1 = a - 1.0;
    let a_plus_1 = a + 1.0;
    let a_minus_1_cos = a_minus_1 * cos_omega;

    let b0 = a * (a_plus_1 + a_minus_1_cos + beta);
    let b1 = a * -2.0 * (a_minus_1 + a_plus_1 * cos_omega);
    let b2 = a * (a_plus_1 + a_minus_1_cos - beta);
    let a0 = a_plus_1 - a_minus_1_cos + beta;
    let a1 = 2.0 * (a_minus_1 - a_plus_1 * cos_omega);
    let a2 = a_plus_1 - a_minus_1_cos - beta;

    (b0, b1, b2, a0, a1, a2)
}

/// Shared shelf terms: `A = sqrt(gain)`, `cos(w0)`, and `2*sqrt(A)*alpha`.
#[inline]
fn shelf_terms(frequency: f32, q: f32, gain: f32, sample_rate: f32) -> (f32, f32, f32) {
    let a = sqrtf(gain.max(0.0));
    let omega = 2.0 * PI * design_frequency(frequency, sample_rate) / sample_rate;
    let beta = sinf(omega) * sqrtf(a) / q;
    (a, cosf(omega), beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db_to_linear;
    use core::f32::consts::FRAC_1_SQRT_2;

    fn settle_dc(biquad: &mut Biquad) -> f32 {
        let mut output = 0.0;
        for _ in 0..20000 {
            output = biquad.process(1.0);
        }
        output
    }

    fn settle_nyquist(biquad: &mut Biquad) -> f32 {
        let mut peak = 0.0f32;
        for i in 0..20000 {
            let input = if i % 2 == 0 { 1.0 } else { -1.0 };
            let out = biquad.process(input);
            if i > 19000 {
                peak = peak.max(out.abs());
            }
        }
        peak
    }

    #[test]
    fn test_biquad_passthrough() {
        let mut biquad = Biquad::new();

        for i in 0..10 {
            let input = i as f32 * 0.1;
            let output = biquad.process(input);
            assert!((output - input).abs() < 0.0001);
        }
    }

    #[test]
    fn test_biquad_clear() {
        let mut biquad = Biquad::new();
        for _ in 0..10 {
            biquad.process(1.0);
        }

        biquad.clear();

        assert_eq!(biquad.x1, 0.0);
        assert_eq!(biquad.x2, 0.0);
        assert_eq!(biquad.y1, 0.0);
        assert_eq!(biquad.y2, 0.0);
    }

    #[test]
    fn test_set_coefficients_keeps_history() {
        let mut biquad = Biquad::new();
        biquad.set_coefficient_tuple(highpass_coefficients(30.0, FRAC_1_SQRT_2, 48000.0));
        biquad.process(0.5);
        biquad.process(0.25);
        let (x1, y1) = (biquad.x1, biquad.y1);

        biquad.set_coefficient_tuple(highpass_coefficients(30.0, FRAC_1_SQRT_2, 48000.0));

        assert_eq!(biquad.x1, x1);
        assert_eq!(biquad.y1, y1);
    }

    #[test]
    fn test_highpass_blocks_dc() {
        let mut biquad = Biquad::new();
        biquad.set_coefficient_tuple(highpass_coefficients(30.0, FRAC_1_SQRT_2, 48000.0));

        let output = settle_dc(&mut biquad);
        assert!(output.abs() < 1e-3, "DC should be removed, got {output}");
    }

    #[test]
    fn test_first_order_lowpass_dc_and_nyquist() {
        let mut biquad = Biquad::new();
        biquad.set_coefficient_tuple(first_order_lowpass_coefficients(5500.0, 48000.0));

        let dc = settle_dc(&mut biquad);
        assert!((dc - 1.0).abs() < 1e-3, "DC should pass, got {dc}");

        biquad.clear();
        let nyquist = settle_nyquist(&mut biquad);
        assert!(nyquist < 1e-3, "Bilinear LP has a zero at Nyquist, got {nyquist}");
    }

    #[test]
    fn test_first_order_lowpass_has_no_second_order_terms() {
        let (_, _, b2, _, _, a2) = first_order_lowpass_coefficients(5500.0, 44100.0);
        assert_eq!(b2, 0.0);
        assert_eq!(a2, 0.0);
    }

    #[test]
    fn test_corners_past_nyquist_stay_stable() {
        for sample_rate in [8000.0, 11025.0] {
            let (_, _, _, a0, a1, _) = first_order_lowpass_coefficients(5500.0, sample_rate);
            let pole = -a1 / a0;
            assert!(pole.abs() < 1.0, "pole {pole} at {sample_rate} Hz");

            let (_, _, _, a0, a1, a2) = highpass_coefficients(6000.0, FRAC_1_SQRT_2, sample_rate);
            assert!((a2 / a0).abs() < 1.0 && (a1 / a0).abs() < 1.0 + a2 / a0);

            let mut shelf = Biquad::new();
            let coefficients = high_shelf_coefficients(9000.0, FRAC_1_SQRT_2, 2.5, sample_rate);
            shelf.set_coefficient_tuple(coefficients);
            let peak = settle_nyquist(&mut shelf);
            assert!(peak.is_finite() && peak < 10.0, "shelf peak {peak} at {sample_rate} Hz");
        }
    }

    #[test]
    fn test_low_shelf_dc_gain_matches() {
        let gain = db_to_linear(3.5);
        let mut biquad = Biquad::new();
        biquad.set_coefficient_tuple(low_shelf_coefficients(450.0, FRAC_1_SQRT_2, gain, 48000.0));

        let dc = settle_dc(&mut biquad);
        assert!((dc - gain).abs() < 1e-3, "Expected DC gain {gain}, got {dc}");

        biquad.clear();
        let nyquist = settle_nyquist(&mut biquad);
        assert!((nyquist - 1.0).abs() < 1e-2, "Expected unity at Nyquist, got {nyquist}");
    }

    #[test]
    fn test_high_shelf_nyquist_gain_matches() {
        let gain = db_to_linear(8.0);
        let mut biquad = Biquad::new();
        biquad.set_coefficient_tuple(high_shelf_coefficients(1500.0, FRAC_1_SQRT_2, gain, 48000.0));

        let nyquist = settle_nyquist(&mut biquad);
        assert!(
            (nyquist - gain).abs() < 1e-2,
            "Expected Nyquist gain {gain}, got {nyquist}"
        );

        biquad.clear();
        let dc = settle_dc(&mut biquad);
        assert!((dc - 1.0).abs() < 1e-3, "Expected unity at DC, got {dc}");
    }

    #[test]
    fn test_unity_shelf_is_passthrough() {
        let (b0, b1, b2, a0, a1, a2) = low_shelf_coefficients(450.0, FRAC_1_SQRT_2, 1.0, 48000.0);
        assert!((b0 / a0 - 1.0).abs() < 1e-6);
        assert!((b1 - a1).abs() < 1e-5);
        assert!((b2 - a2).abs() < 1e-5);
    }
}
