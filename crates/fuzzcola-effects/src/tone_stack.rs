//! Single-knob tone stack: a low shelf and a high shelf moving in opposition.
//!
//! One control in `[0, 1]` tilts the spectrum. At 0 the bass shelf boosts
//! 3.5 dB while the treble shelf cuts 5 dB; at 1 bass is cut 2.5 dB and treble
//! boosted 8 dB. Both shelf gains interpolate linearly in dB.
//!
//! ```text
//! input ──► low shelf (450 Hz) ──► high shelf (1.5 kHz) ──► output
//! ```

use fuzzcola_core::{
    Biquad, Effect, db_to_linear, high_shelf_coefficients, lerp, low_shelf_coefficients,
};

/// Low shelf corner in Hz.
pub const LOW_SHELF_HZ: f32 = 450.0;
/// High shelf corner in Hz.
pub const HIGH_SHELF_HZ: f32 = 1500.0;
/// Q shared by both shelves.
pub const SHELF_Q: f32 = core::f32::consts::FRAC_1_SQRT_2;

/// Bass shelf gain at tone 0, in dB.
pub const BASS_DB_AT_MIN: f32 = 3.5;
/// Bass shelf gain at tone 1, in dB.
pub const BASS_DB_AT_MAX: f32 = -2.5;
/// Treble shelf gain at tone 0, in dB.
pub const TREBLE_DB_AT_MIN: f32 = -5.0;
/// Treble shelf gain at tone 1, in dB.
pub const TREBLE_DB_AT_MAX: f32 = 8.0;

/// Tone value a freshly prepared stack starts at.
pub const DEFAULT_TONE: f32 = 0.5;

/// Bass shelf gain in dB for a tone setting.
///
/// ```rust
/// use fuzzcola_effects::tone_stack::bass_gain_db_for;
///
/// assert_eq!(bass_gain_db_for(0.0), 3.5);
/// assert_eq!(bass_gain_db_for(1.0), -2.5);
/// ```
#[inline]
pub fn bass_gain_db_for(tone: f32) -> f32 {
    lerp(BASS_DB_AT_MIN, BASS_DB_AT_MAX, tone)
}

/// Treble shelf gain in dB for a tone setting.
#[inline]
pub fn treble_gain_db_for(tone: f32) -> f32 {
    lerp(TREBLE_DB_AT_MIN, TREBLE_DB_AT_MAX, tone)
}

/// Two-shelf tone control.
///
/// Changing the tone recomputes both shelves' coefficients but keeps their
/// filter history, so moving the knob mid-stream does not pop.
///
/// # Example
///
/// ```rust
/// use fuzzcola_effects::ToneStack;
///
/// let mut tone = ToneStack::new(48000.0);
/// tone.set_tone(0.5);
/// assert!((tone.bass_gain_db() - 0.5).abs() < 1e-6);
/// assert!((tone.treble_gain_db() - 1.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ToneStack {
    low_shelf: Biquad,
    high_shelf: Biquad,
    tone: f32,
    sample_rate: f32,
}

impl ToneStack {
    /// Create a tone stack at [`DEFAULT_TONE`].
    pub fn new(sample_rate: f32) -> Self {
        let mut stack = Self {
            low_shelf: Biquad::new(),
            high_shelf: Biquad::new(),
            tone: DEFAULT_TONE,
            sample_rate,
        };
        stack.update_coefficients();
        stack
    }

    /// Clear history, return to [`DEFAULT_TONE`] and design for `sample_rate`.
    pub fn prepare(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.tone = DEFAULT_TONE;
        self.low_shelf.clear();
        self.high_shelf.clear();
        self.update_coefficients();
    }

    /// Set the tone. Clamped to `[0, 1]`; non-finite values fall back to
    /// [`DEFAULT_TONE`].
    pub fn set_tone(&mut self, tone: f32) {
        let tone = if tone.is_finite() {
            tone.clamp(0.0, 1.0)
        } else {
            DEFAULT_TONE
        };
        self.tone = tone;
        self.update_coefficients();
    }

    /// Current tone setting.
    pub fn tone(&self) -> f32 {
        self.tone
    }

    /// Current bass shelf gain in dB.
    pub fn bass_gain_db(&self) -> f32 {
        bass_gain_db_for(self.tone)
    }

    /// Current treble shelf gain in dB.
    pub fn treble_gain_db(&self) -> f32 {
        treble_gain_db_for(self.tone)
    }

    /// Normalized `(b0, b1, b2, a1, a2)` of the low and high shelf.
    pub fn coefficients(&self) -> [(f32, f32, f32, f32, f32); 2] {
        [self.low_shelf.coefficients(), self.high_shelf.coefficients()]
    }

    fn update_coefficients(&mut self) {
        let bass = db_to_linear(self.bass_gain_db());
        let treble = db_to_linear(self.treble_gain_db());
        self.low_shelf.set_coefficient_tuple(low_shelf_coefficients(
            LOW_SHELF_HZ,
            SHELF_Q,
            bass,
            self.sample_rate,
        ));
        self.high_shelf.set_coefficient_tuple(high_shelf_coefficients(
            HIGH_SHELF_HZ,
            SHELF_Q,
            treble,
            self.sample_rate,
        ));
    }
}

impl Effect for ToneStack {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.high_shelf.process(self.low_shelf.process(input))
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.low_shelf.process(*sample);
        }
        for sample in buffer.iter_mut() {
            *sample = self.high_shelf.process(*sample);
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.update_coefficients();
    }

    fn reset(&mut self) {
        self.low_shelf.clear();
        self.high_shelf.clear();
    }
}
