//! The two tanh waveshaping curves and the stage that applies them.
//!
//! | Curve | Character | Harmonics | Output range |
//! |-------|-----------|-----------|--------------|
//! | [`symmetric_drive`] | Soft pre-shaping | Odd | (-0.9, 0.9) |
//! | [`asymmetric_drive`] | Offset tanh, re-zeroed | Even + Odd | (-0.8·(1+c), 0.8·(1-c)), c = tanh(1.25) |
//!
//! Cascading the two is what gives the pedal its mixed-harmonic fuzz: stage 1
//! squares the wave up, stage 2 bends it asymmetrically.

use fuzzcola_core::Effect;
use libm::tanhf;

/// Output ceiling of the symmetric stage.
pub const SYMMETRIC_V_CLIP: f32 = 0.9;
/// Drive of the symmetric stage.
pub const SYMMETRIC_DRIVE: f32 = 3.0;

/// Output scale of the asymmetric stage.
pub const ASYMMETRIC_V_CLIP: f32 = 0.8;
/// Drive of the asymmetric stage.
pub const ASYMMETRIC_DRIVE: f32 = 5.0;
/// Input bias of the asymmetric stage; sets the amount of asymmetry.
pub const ASYMMETRIC_OFFSET: f32 = 0.25;

/// Stage 1 curve: `0.9 * tanh(3 * x / 0.9)`.
///
/// Odd-symmetric, saturates towards ±0.9.
///
/// # Example
///
/// ```rust
/// use fuzzcola_effects::symmetric_drive;
///
/// assert_eq!(symmetric_drive(0.0), 0.0);
/// assert_eq!(symmetric_drive(-0.3), -symmetric_drive(0.3));
/// assert!(symmetric_drive(100.0) <= 0.9);
/// ```
#[inline]
pub fn symmetric_drive(x: f32) -> f32 {
    SYMMETRIC_V_CLIP * tanhf(SYMMETRIC_DRIVE * x / SYMMETRIC_V_CLIP)
}

/// Stage 2 curve: `0.8 * (tanh(5 * (x + 0.25)) - tanh(5 * 0.25))`.
///
/// The biased tanh adds even harmonics; subtracting `tanh(drive * offset)`
/// pins the curve back through the origin.
///
/// # Example
///
/// ```rust
/// use fuzzcola_effects::asymmetric_drive;
///
/// assert_eq!(asymmetric_drive(0.0), 0.0);
/// // Positive swings compress much harder than negative ones.
/// assert!(asymmetric_drive(1.0) < -asymmetric_drive(-1.0));
/// ```
#[inline]
pub fn asymmetric_drive(x: f32) -> f32 {
    let center = tanhf(ASYMMETRIC_DRIVE * ASYMMETRIC_OFFSET);
    ASYMMETRIC_V_CLIP * (tanhf(ASYMMETRIC_DRIVE * (x + ASYMMETRIC_OFFSET)) - center)
}

/// Which curve a [`WaveShaper`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapingCurve {
    /// [`symmetric_drive`]
    Symmetric,
    /// [`asymmetric_drive`]
    Asymmetric,
}

impl ShapingCurve {
    /// Apply the curve to one sample.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            ShapingCurve::Symmetric => symmetric_drive(x),
            ShapingCurve::Asymmetric => asymmetric_drive(x),
        }
    }
}

/// Memoryless waveshaping stage.
#[derive(Debug, Clone, Copy)]
pub struct WaveShaper {
    curve: ShapingCurve,
}

impl WaveShaper {
    /// Create a shaper using `curve`.
    pub const fn new(curve: ShapingCurve) -> Self {
        Self { curve }
    }

    /// The curve this stage applies.
    pub const fn curve(&self) -> ShapingCurve {
        self.curve
    }
}

impl Effect for WaveShaper {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.curve.apply(input)
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        match self.curve {
            ShapingCurve::Symmetric => {
                for sample in buffer.iter_mut() {
                    *sample = symmetric_drive(*sample);
                }
            }
            ShapingCurve::Asymmetric => {
                for sample in buffer.iter_mut() {
                    *sample = asymmetric_drive(*sample);
                }
            }
        }
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_matches_formula() {
        for x in [-2.0f32, -0.1, 0.0, 0.05, 0.7, 3.0] {
            let expected = 0.9 * (3.0 * x / 0.9).tanh();
            assert!((symmetric_drive(x) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_asymmetric_matches_formula() {
        for x in [-2.0f32, -0.1, 0.0, 0.05, 0.7, 3.0] {
            let expected = 0.8 * ((5.0 * (x + 0.25)).tanh() - 1.25f32.tanh());
            assert!((asymmetric_drive(x) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_asymmetric_exact_zero() {
        assert_eq!(asymmetric_drive(0.0), 0.0);
    }

    #[test]
    fn test_asymmetric_range() {
        let center = 1.25f32.tanh();
        assert!((asymmetric_drive(1000.0) - 0.8 * (1.0 - center)).abs() < 1e-6);
        assert!((asymmetric_drive(-1000.0) + 0.8 * (1.0 + center)).abs() < 1e-6);
    }

    #[test]
    fn test_small_signal_gain() {
        // Slope at the origin: stage 1 is 3.0, stage 2 is 0.8 * 5 * (1 - tanh²(1.25)).
        let h = 1e-3;
        let slope1 = symmetric_drive(h) / h;
        assert!((slope1 - 3.0).abs() < 0.01, "stage 1 slope {slope1}");
        let c = 1.25f32.tanh();
        let expected2 = 0.8 * 5.0 * (1.0 - c * c);
        let slope2 = (asymmetric_drive(h) - asymmetric_drive(-h)) / (2.0 * h);
        assert!((slope2 - expected2).abs() < 0.01, "stage 2 slope {slope2}");
    }

    #[test]
    fn test_waveshaper_block_matches_curve() {
        let mut shaper = WaveShaper::new(ShapingCurve::Asymmetric);
        let mut block = [-0.5f32, 0.0, 0.25, 1.5];
        let expected: Vec<f32> = block.iter().map(|&x| asymmetric_drive(x)).collect();
        shaper.process_block_inplace(&mut block);
        assert_eq!(block.to_vec(), expected);
        assert_eq!(shaper.curve(), ShapingCurve::Asymmetric);
    }
}
