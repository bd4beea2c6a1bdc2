//! Control-to-stage mapping.
//!
//! Runs once at the top of every processed block: the user controls are
//! turned into the input gain, output gain and effective tone, and pushed to
//! each channel's chain. The gain stages ramp to their new targets; the tone
//! stack is redesigned on the spot.

use fuzzcola_core::lerp;

use crate::{ControlParameters, FuzzChain};

/// Input gain at sustain 0, in dB.
pub const SUSTAIN_MIN_DB: f32 = 15.0;
/// Input gain at sustain 1, in dB.
pub const SUSTAIN_MAX_DB: f32 = 45.0;
/// Tone the stack is parked at while the tone switch is off.
pub const NEUTRAL_TONE: f32 = 0.5;

/// Stage settings derived from [`ControlParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedSettings {
    /// Input gain target in dB.
    pub input_gain_db: f32,
    /// Output gain target in dB.
    pub output_gain_db: f32,
    /// Tone actually handed to the tone stack.
    pub tone: f32,
}

/// Sustain (0 – 1) to input gain in dB, linear between 15 and 45 dB.
///
/// ```rust
/// use fuzzcola_effects::mapper::sustain_to_gain_db;
///
/// assert_eq!(sustain_to_gain_db(0.0), 15.0);
/// assert_eq!(sustain_to_gain_db(0.5), 30.0);
/// assert_eq!(sustain_to_gain_db(1.0), 45.0);
/// ```
#[inline]
pub fn sustain_to_gain_db(sustain: f32) -> f32 {
    lerp(SUSTAIN_MIN_DB, SUSTAIN_MAX_DB, sustain)
}

/// Tone handed to the stack: the knob when the switch is on, otherwise
/// [`NEUTRAL_TONE`].
#[inline]
pub fn effective_tone(tone: f32, tone_enabled: bool) -> f32 {
    if tone_enabled { tone } else { NEUTRAL_TONE }
}

/// Map controls to stage settings. Out-of-range or non-finite controls are
/// sanitized first.
///
/// ```rust
/// use fuzzcola_effects::{ControlParameters, map_controls};
///
/// let settings = map_controls(&ControlParameters {
///     sustain: 0.9,
///     tone: 0.42,
///     volume_db: -3.0,
///     pedal_on: true,
///     tone_enabled: false,
/// });
/// assert!((settings.input_gain_db - 42.0).abs() < 1e-4);
/// assert_eq!(settings.output_gain_db, -3.0);
/// assert_eq!(settings.tone, 0.5);
/// ```
pub fn map_controls(controls: &ControlParameters) -> MappedSettings {
    let controls = controls.sanitized();
    MappedSettings {
        input_gain_db: sustain_to_gain_db(controls.sustain),
        output_gain_db: controls.volume_db,
        tone: effective_tone(controls.tone, controls.tone_enabled),
    }
}

/// Map `controls` and push the result to every chain.
///
/// Idempotent: applying the same controls twice leaves every chain exactly
/// as applying them once.
pub fn apply_controls(controls: &ControlParameters, chains: &mut [FuzzChain]) {
    let settings = map_controls(controls);
    for chain in chains.iter_mut() {
        chain.apply(&settings);
    }
}
