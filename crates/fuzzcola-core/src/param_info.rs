//! Parameter introspection for host adapters.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that
//! let an external parameter store (plugin shell, hardware controller, CLI)
//! discover and write the pedal's controls by index.
//!
//! # Design
//!
//! Each parameter is described by a [`ParamDescriptor`] carrying display,
//! range and host metadata:
//!
//! - [`ParamId`] - stable numeric ID for automation and state recall
//! - [`ParamFlags`] - capability flags (automatable, stepped, ...)
//! - `string_id` - human-readable stable ID
//!
//! Switches are modelled as stepped `0.0`/`1.0` parameters; any value above
//! `0.5` reads as "on".
//!
//! # Example
//!
//! ```rust
//! use fuzzcola_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Level {
//!     level_db: f32,
//! }
//!
//! impl ParameterInfo for Level {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::gain_db("Level", "Level", -60.0, 12.0, 0.0)
//!                 .with_id(ParamId(1), "LEVEL")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.level_db,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.level_db = value.clamp(-60.0, 12.0);
//!         }
//!     }
//! }
//!
//! let mut level = Level { level_db: 0.0 };
//! level.set_param(0, 40.0);
//! assert_eq!(level.get_param(0), 12.0);
//! assert_eq!(level.find_param_by_name("level"), Some(0));
//! ```

/// Numeric parameter identity, independent of index order.
///
/// Once assigned, a `ParamId` must never change for a given parameter:
/// hosts record automation and saved state against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// # Example
///
/// ```rust
/// use fuzzcola_core::ParamFlags;
///
/// let switch = ParamFlags::default().union(ParamFlags::STEPPED);
/// assert!(switch.contains(ParamFlags::STEPPED));
/// assert!(!ParamFlags::default().contains(switch));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// Host may automate the parameter. Set on every pedal control.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (switches, enum-like values).
    pub const STEPPED: Self = Self(1 << 1);

    /// Every bit of `other` is present.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Bitwise union.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for processors that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index; indices are stable for the
/// lifetime of the instance. Valid indices are `0..param_count()`.
pub trait ParameterInfo {
    /// Returns the number of parameters exposed.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at `index`, or `None` if out
    /// of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at `index`.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at `index`.
    ///
    /// Implementations clamp to the descriptor's range. Out-of-range indices
    /// are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Index of the parameter called `name`, ignoring ASCII case.
    ///
    /// Matches against [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Index of the parameter carrying `id`.
    ///
    /// Scans all parameters (O(n)) - suitable for setup paths, not audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Display, range and host metadata for one control.
///
/// The `short_name` field should be 8 characters or less for hardware
/// displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Sustain", "Pedal On").
    pub name: &'static str,

    /// Abbreviation for narrow displays (8 characters at most).
    pub short_name: &'static str,

    /// Display unit.
    pub unit: ParamUnit,

    /// Lower bound (inclusive).
    pub min: f32,

    /// Upper bound (inclusive).
    pub max: f32,

    /// Default value.
    pub default: f32,

    /// Increment per encoder detent.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Human-readable stable ID. Default: `""` (unassigned).
    pub string_id: &'static str,

    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Continuous unitless control over `min..=max`.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
        step: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Level control in dB, stepping by half a decibel.
    pub const fn gain_db(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.5,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// On/off switch: stepped, `0.0` (off) to `1.0` (on).
    pub const fn toggle(name: &'static str, short_name: &'static str, default_on: bool) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: 0.0,
            max: 1.0,
            default: if default_on { 1.0 } else { 0.0 },
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
        }
    }

    /// Attach the numeric and string identities.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuzzcola_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::toggle("Pedal On", "On", true).with_id(ParamId(4), "PEDALON");
    /// assert_eq!(desc.id, ParamId(4));
    /// assert_eq!(desc.string_id, "PEDALON");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the recommended step increment.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Whether this descriptor is an on/off switch.
    pub const fn is_toggle(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED) && self.min == 0.0 && self.max == 1.0
    }

    /// Pin `value` into `min..=max`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuzzcola_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Volume", "Vol", -60.0, 12.0, 0.0);
    /// assert_eq!(desc.clamp(-3.0), -3.0);
    /// assert_eq!(desc.clamp(-75.0), -60.0);
    /// assert_eq!(desc.clamp(18.0), 12.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }
}

/// How a control's value is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Levels, shown as "dB".
    Decibels,

    /// Knob positions and switches.
    None,
}

impl ParamUnit {
    /// Text appended after a formatted value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuzzcola_core::ParamUnit;
    ///
    /// assert_eq!(format!("-6{}", ParamUnit::Decibels.suffix()), "-6 dB");
    /// assert!(ParamUnit::None.suffix().is_empty());
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Decibels => " dB",
            Self::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPedal {
        drive: f32,
        on: bool,
    }

    impl ParameterInfo for TestPedal {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::custom("Drive", "Drive", 0.0, 1.0, 0.5, 0.01)
                        .with_id(ParamId(10), "DRIVE"),
                ),
                1 => Some(ParamDescriptor::toggle("Pedal On", "On", true).with_id(ParamId(11), "ON")),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.drive,
                1 => {
                    if self.on {
                        1.0
                    } else {
                        0.0
                    }
                }
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            match index {
                0 => self.drive = value.clamp(0.0, 1.0),
                1 => self.on = value > 0.5,
                _ => {}
            }
        }
    }

    #[test]
    fn test_find_by_name_and_string_id() {
        let pedal = TestPedal { drive: 0.5, on: true };
        assert_eq!(pedal.find_param_by_name("drive"), Some(0));
        assert_eq!(pedal.find_param_by_name("PEDAL ON"), Some(1));
        assert_eq!(pedal.find_param_by_name("on"), Some(1));
        assert_eq!(pedal.find_param_by_name("missing"), None);
    }

    #[test]
    fn test_index_by_id() {
        let pedal = TestPedal { drive: 0.5, on: true };
        assert_eq!(pedal.param_index_by_id(ParamId(11)), Some(1));
        assert_eq!(pedal.param_index_by_id(ParamId(99)), None);
    }

    #[test]
    fn test_toggle_descriptor() {
        let desc = ParamDescriptor::toggle("Tone Enabled", "Tone", false);
        assert!(desc.is_toggle());
        assert_eq!(desc.clamp(desc.default), 0.0);
        assert_eq!(desc.step, 1.0);
        assert!(!ParamDescriptor::gain_db("Vol", "Vol", -60.0, 12.0, 0.0).is_toggle());
    }

    #[test]
    fn test_set_param_clamps() {
        let mut pedal = TestPedal { drive: 0.5, on: true };
        pedal.set_param(0, 4.0);
        assert_eq!(pedal.get_param(0), 1.0);
        pedal.set_param(1, 0.2);
        assert_eq!(pedal.get_param(1), 0.0);
        pedal.set_param(7, 1.0);
    }
}
