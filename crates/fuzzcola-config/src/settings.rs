//! Pedal settings file format and resolution.

use serde::{Deserialize, Serialize};
use std::path::Path;

use fuzzcola_effects::controls::{self, PEDAL_ON, SUSTAIN, TONE, TONE_ENABLED, VOLUME};
use fuzzcola_effects::{ControlParameters, find_factory_preset};

use crate::error::ConfigError;

/// Settings file for offline processing.
///
/// Every field is optional. Resolution starts from the named factory preset
/// (or the default controls when no preset is named) and then applies each
/// field that is present.
///
/// # TOML Format
///
/// ```toml
/// preset = "Scooped Rhythm"
/// volume_db = -1.5
/// tone_enabled = true
/// block_size = 256
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PedalSettings {
    /// Factory preset to start from (matched ignoring ASCII case).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Sustain override, 0 – 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustain: Option<f32>,

    /// Tone override, 0 – 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<f32>,

    /// Volume override in dB, -60 – 12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_db: Option<f32>,

    /// Pedal on/off override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pedal_on: Option<bool>,

    /// Tone stack switch override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_enabled: Option<bool>,

    /// Processing block size hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_size: Option<usize>,
}

impl PedalSettings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let settings = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded pedal settings");
        Ok(settings)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Layer `overrides` on top of these settings. Fields set in `overrides`
    /// win.
    #[must_use]
    pub fn merged_with(self, overrides: PedalSettings) -> Self {
        Self {
            preset: overrides.preset.or(self.preset),
            sustain: overrides.sustain.or(self.sustain),
            tone: overrides.tone.or(self.tone),
            volume_db: overrides.volume_db.or(self.volume_db),
            pedal_on: overrides.pedal_on.or(self.pedal_on),
            tone_enabled: overrides.tone_enabled.or(self.tone_enabled),
            block_size: overrides.block_size.or(self.block_size),
        }
    }

    /// Resolve to a control snapshot.
    ///
    /// Out-of-range values are clamped with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuzzcola_config::PedalSettings;
    ///
    /// let settings = PedalSettings::from_toml("preset = \"tight lead\"\nvolume_db = -4.0").unwrap();
    /// let controls = settings.resolve().unwrap();
    /// assert_eq!(controls.sustain, 0.60);
    /// assert_eq!(controls.volume_db, -4.0);
    /// ```
    pub fn resolve(&self) -> Result<ControlParameters, ConfigError> {
        let mut resolved = match &self.preset {
            Some(name) => {
                let (_, preset) = find_factory_preset(name)
                    .ok_or_else(|| ConfigError::PresetNotFound(name.clone()))?;
                preset.controls()
            }
            None => ControlParameters::default(),
        };

        for (index, value) in [
            (SUSTAIN, self.sustain),
            (TONE, self.tone),
            (VOLUME, self.volume_db),
        ] {
            if let Some(value) = value {
                warn_if_clamped(index, value);
                resolved.set(index, value);
            }
        }
        if let Some(on) = self.pedal_on {
            resolved.set(PEDAL_ON, if on { 1.0 } else { 0.0 });
        }
        if let Some(on) = self.tone_enabled {
            resolved.set(TONE_ENABLED, if on { 1.0 } else { 0.0 });
        }

        Ok(resolved)
    }
}

fn warn_if_clamped(index: usize, value: f32) {
    let Some(desc) = controls::descriptor(index) else {
        return;
    };
    if !value.is_finite() {
        tracing::warn!(param = desc.name, value, "non-finite value, using default");
    } else if desc.clamp(value) != value {
        tracing::warn!(
            param = desc.name,
            value,
            min = desc.min,
            max = desc.max,
            "value out of range, clamping"
        );
    }
}
