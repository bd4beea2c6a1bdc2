//! Property-based tests for fuzzcola-core DSP primitives.
//!
//! Tests filter stability and gain-ramp behaviour using proptest for
//! randomized input generation.

use fuzzcola_core::{
    Biquad, Effect, GainStage, db_to_linear, first_order_lowpass_coefficients,
    high_shelf_coefficients, highpass_coefficients, low_shelf_coefficients,
};
use proptest::prelude::*;
use std::f32::consts::FRAC_1_SQRT_2;

/// Coefficient designs indexed 0..4 (HP, first-order LP, low shelf, high shelf).
fn configure_biquad(biquad: &mut Biquad, variant: usize, freq: f32, gain_db: f32, sr: f32) {
    let gain = db_to_linear(gain_db);
    let coefficients = match variant % 4 {
        0 => highpass_coefficients(freq, FRAC_1_SQRT_2, sr),
        1 => first_order_lowpass_coefficients(freq, sr),
        2 => low_shelf_coefficients(freq, FRAC_1_SQRT_2, gain, sr),
        3 => high_shelf_coefficients(freq, FRAC_1_SQRT_2, gain, sr),
        _ => unreachable!(),
    };
    biquad.set_coefficient_tuple(coefficients);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every design the pedal uses stays finite and bounded for any corner
    /// frequency, shelf gain within the tone-stack range, and sample rate,
    /// including corners above Nyquist at the low rates.
    #[test]
    fn biquad_stability(
        freq in 20.0f32..15000.0f32,
        gain_db in -6.0f32..9.0f32,
        variant in 0usize..4,
        sr_idx in 0usize..6,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let sr = [8000.0, 11025.0, 44100.0, 48000.0, 88200.0, 96000.0][sr_idx];
        let mut biquad = Biquad::new();
        configure_biquad(&mut biquad, variant, freq, gain_db, sr);

        for _ in 0..8 {
            for &sample in &input {
                let out = biquad.process(sample);
                prop_assert!(
                    out.is_finite() && out.abs() < 50.0,
                    "Design {} (freq={}, gain={} dB, sr={}) produced {} for input {}",
                    variant % 4, freq, gain_db, sr, out, sample
                );
            }
        }
    }

    /// A gain ramp always moves monotonically from the old gain to the new one
    /// and lands exactly on the target.
    #[test]
    fn gain_ramp_is_monotonic(
        from_db in -60.0f32..45.0f32,
        to_db in -60.0f32..45.0f32,
    ) {
        let mut stage = GainStage::new(48000.0, from_db);
        stage.set_gain_db(to_db);

        let mut prev = stage.current_linear();
        let rising = to_db >= from_db;
        for _ in 0..48 {
            let g = stage.process(1.0);
            if rising {
                prop_assert!(g >= prev - 1e-4);
            } else {
                prop_assert!(g <= prev + 1e-4);
            }
            prev = g;
        }
        prop_assert_eq!(stage.current_linear(), stage.target_linear());
    }
}
