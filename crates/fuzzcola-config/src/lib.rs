//! Settings files for the fuzzcola pedal.
//!
//! Offline tools describe a pedal setting as a small TOML file: an optional
//! factory preset name plus per-control overrides. [`PedalSettings::resolve`]
//! turns that into the [`ControlParameters`] snapshot the pedal consumes.
//!
//! Precedence, lowest to highest: default controls, named factory preset,
//! fields in the file, then anything layered on with
//! [`PedalSettings::merged_with`] (command-line flags, for example).
//!
//! # Example
//!
//! ```rust,no_run
//! use fuzzcola_config::PedalSettings;
//! use fuzzcola_effects::{FuzzPedal, SampleRateContext};
//!
//! let settings = PedalSettings::load("rhythm.toml").unwrap();
//! let mut pedal = FuzzPedal::new(SampleRateContext::new(48000.0, 512, 2));
//! pedal.set_controls(settings.resolve().unwrap());
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use fuzzcola_effects::ControlParameters;
pub use settings::PedalSettings;
