//! Factory presets compiled into the pedal.
//!
//! A preset is a complete control snapshot. Applying one overwrites all five
//! controls; the next processed block picks them up.

use crate::ControlParameters;

/// A named, compiled-in control snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactoryPreset {
    /// Display name.
    pub name: &'static str,
    /// Sustain, 0 – 1.
    pub sustain: f32,
    /// Tone, 0 – 1.
    pub tone: f32,
    /// Volume in dB.
    pub volume_db: f32,
    /// Tone stack switch.
    pub tone_enabled: bool,
    /// Pedal on/off.
    pub pedal_on: bool,
}

impl FactoryPreset {
    /// The controls this preset sets.
    pub const fn controls(&self) -> ControlParameters {
        ControlParameters {
            sustain: self.sustain,
            tone: self.tone,
            volume_db: self.volume_db,
            pedal_on: self.pedal_on,
            tone_enabled: self.tone_enabled,
        }
    }
}

/// The factory bank, in program order.
pub static FACTORY_PRESETS: [FactoryPreset; 4] = [
    FactoryPreset {
        name: "Wall Of Sound",
        sustain: 0.90,
        tone: 0.42,
        volume_db: 0.0,
        tone_enabled: true,
        pedal_on: true,
    },
    FactoryPreset {
        name: "Scooped Rhythm",
        sustain: 0.72,
        tone: 0.30,
        volume_db: -3.0,
        tone_enabled: true,
        pedal_on: true,
    },
    FactoryPreset {
        name: "Tight Lead",
        sustain: 0.60,
        tone: 0.65,
        volume_db: 2.0,
        tone_enabled: true,
        pedal_on: true,
    },
    FactoryPreset {
        name: "Tone Bypass Hit",
        sustain: 0.85,
        tone: 0.50,
        volume_db: 0.0,
        tone_enabled: false,
        pedal_on: true,
    },
];

/// Preset at `index`, or `None` when out of range.
pub fn factory_preset(index: usize) -> Option<&'static FactoryPreset> {
    FACTORY_PRESETS.get(index)
}

/// Look a preset up by name, ignoring ASCII case.
///
/// ```rust
/// use fuzzcola_effects::find_factory_preset;
///
/// let (index, preset) = find_factory_preset("tight lead").unwrap();
/// assert_eq!(index, 2);
/// assert_eq!(preset.volume_db, 2.0);
/// ```
pub fn find_factory_preset(name: &str) -> Option<(usize, &'static FactoryPreset)> {
    FACTORY_PRESETS
        .iter()
        .enumerate()
        .find(|(_, preset)| preset.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_order() {
        let names: Vec<&str> = FACTORY_PRESETS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Wall Of Sound", "Scooped Rhythm", "Tight Lead", "Tone Bypass Hit"]
        );
    }

    #[test]
    fn test_all_presets_in_range() {
        for preset in &FACTORY_PRESETS {
            let controls = preset.controls();
            assert_eq!(controls, controls.sanitized(), "{} out of range", preset.name);
            assert!(preset.pedal_on);
        }
    }

    #[test]
    fn test_tone_bypass_hit_disables_tone() {
        let (_, preset) = find_factory_preset("Tone Bypass Hit").unwrap();
        assert!(!preset.controls().tone_enabled);
    }

    #[test]
    fn test_out_of_range_lookup() {
        assert!(factory_preset(4).is_none());
        assert!(factory_preset(usize::MAX).is_none());
        assert!(find_factory_preset("Clean Boost").is_none());
    }
}
