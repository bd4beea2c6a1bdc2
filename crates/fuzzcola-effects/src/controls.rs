//! The pedal's five user controls.
//!
//! | Index | ID | Name | Range | Default |
//! |-------|----|------|-------|---------|
//! | 0 | `SUSTAIN` | Sustain | 0 – 1 | 0.5 |
//! | 1 | `TONE` | Tone | 0 – 1 | 0.5 |
//! | 2 | `VOLUME` | Volume | -60 – 12 dB | 0 dB |
//! | 3 | `PEDALON` | Pedal On | off/on | on |
//! | 4 | `TONEBYPASS` | Tone Enabled | off/on | on |
//!
//! The `TONEBYPASS` ID is kept for saved-state compatibility even though the
//! switch means "tone stack enabled": when it is off the tone stack is parked
//! at its neutral setting.

use fuzzcola_core::{ParamDescriptor, ParamId};

/// Lowest volume in dB.
pub const VOLUME_MIN_DB: f32 = -60.0;
/// Highest volume in dB.
pub const VOLUME_MAX_DB: f32 = 12.0;

/// Parameter index of sustain.
pub const SUSTAIN: usize = 0;
/// Parameter index of tone.
pub const TONE: usize = 1;
/// Parameter index of volume.
pub const VOLUME: usize = 2;
/// Parameter index of the pedal on/off switch.
pub const PEDAL_ON: usize = 3;
/// Parameter index of the tone-stack switch.
pub const TONE_ENABLED: usize = 4;

/// Number of user controls.
pub const PARAM_COUNT: usize = 5;

const DESCRIPTORS: [ParamDescriptor; PARAM_COUNT] = [
    ParamDescriptor::custom("Sustain", "Sustain", 0.0, 1.0, 0.5, 0.01)
        .with_id(ParamId(0), "SUSTAIN"),
    ParamDescriptor::custom("Tone", "Tone", 0.0, 1.0, 0.5, 0.01).with_id(ParamId(1), "TONE"),
    ParamDescriptor::gain_db("Volume", "Vol", VOLUME_MIN_DB, VOLUME_MAX_DB, 0.0)
        .with_step(0.1)
        .with_id(ParamId(2), "VOLUME"),
    ParamDescriptor::toggle("Pedal On", "On", true).with_id(ParamId(3), "PEDALON"),
    ParamDescriptor::toggle("Tone Enabled", "Tone On", true).with_id(ParamId(4), "TONEBYPASS"),
];

/// Descriptor for the control at `index`.
pub fn descriptor(index: usize) -> Option<ParamDescriptor> {
    DESCRIPTORS.get(index).copied()
}

/// Snapshot of the user controls.
///
/// Values are read once per block; nothing here touches DSP state.
///
/// # Example
///
/// ```rust
/// use fuzzcola_effects::ControlParameters;
///
/// let controls = ControlParameters {
///     sustain: 2.0,
///     volume_db: f32::NAN,
///     ..ControlParameters::default()
/// }
/// .sanitized();
/// assert_eq!(controls.sustain, 1.0);
/// assert_eq!(controls.volume_db, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlParameters {
    /// Pre-clipper drive, 0 – 1.
    pub sustain: f32,
    /// Tone tilt, 0 (dark) – 1 (bright).
    pub tone: f32,
    /// Output level in dB.
    pub volume_db: f32,
    /// When off the pedal passes audio through untouched.
    pub pedal_on: bool,
    /// When off the tone stack is parked at its neutral setting.
    pub tone_enabled: bool,
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            sustain: 0.5,
            tone: 0.5,
            volume_db: 0.0,
            pedal_on: true,
            tone_enabled: true,
        }
    }
}

impl ControlParameters {
    /// Clamp every continuous control into range. Non-finite values are
    /// replaced by their defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            sustain: sanitize(self.sustain, &DESCRIPTORS[SUSTAIN]),
            tone: sanitize(self.tone, &DESCRIPTORS[TONE]),
            volume_db: sanitize(self.volume_db, &DESCRIPTORS[VOLUME]),
            ..self
        }
    }

    /// Read a control by parameter index. Switches read as `0.0`/`1.0`;
    /// unknown indices read as `0.0`.
    pub fn get(&self, index: usize) -> f32 {
        match index {
            SUSTAIN => self.sustain,
            TONE => self.tone,
            VOLUME => self.volume_db,
            PEDAL_ON => bool_to_param(self.pedal_on),
            TONE_ENABLED => bool_to_param(self.tone_enabled),
            _ => 0.0,
        }
    }

    /// Write a control by parameter index, clamped to its range. Switches are
    /// on for values above `0.5`. Unknown indices are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        let Some(desc) = DESCRIPTORS.get(index) else {
            return;
        };
        let value = sanitize(value, desc);
        match index {
            SUSTAIN => self.sustain = value,
            TONE => self.tone = value,
            VOLUME => self.volume_db = value,
            PEDAL_ON => self.pedal_on = value > 0.5,
            TONE_ENABLED => self.tone_enabled = value > 0.5,
            _ => {}
        }
    }
}

fn sanitize(value: f32, desc: &ParamDescriptor) -> f32 {
    if value.is_finite() {
        desc.clamp(value)
    } else {
        desc.default
    }
}

fn bool_to_param(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}
