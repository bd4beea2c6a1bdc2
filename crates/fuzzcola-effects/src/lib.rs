//! Fuzzcola Effects - the fuzz pedal
//!
//! This crate implements a two-stage tanh fuzz with a single-knob tone stack,
//! built on fuzzcola-core:
//!
//! - [`symmetric_drive`] / [`asymmetric_drive`] - The two shaping curves
//! - [`ToneStack`] - Low/high shelf pair driven by one tone control
//! - [`FuzzChain`] - The seven-stage per-channel signal chain
//! - [`ControlParameters`] - The five user controls
//! - [`map_controls`] - Control-to-stage-setting mapping
//! - [`FuzzPedal`] - Block processor (hard bypass, mono/stereo dispatch)
//! - [`FACTORY_PRESETS`] - Compiled-in preset bundles
//!
//! ## Example
//!
//! ```rust
//! use fuzzcola_effects::{FuzzPedal, SampleRateContext};
//!
//! let mut pedal = FuzzPedal::new(SampleRateContext::new(48000.0, 256, 2));
//! pedal.apply_factory_preset(0); // "Wall Of Sound"
//!
//! let mut left = vec![0.05f32; 256];
//! let mut right = vec![0.0f32; 256];
//! pedal.process_block(&mut [&mut left[..], &mut right[..]]);
//! assert!(right.iter().all(|&s| s == 0.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod chain;
pub mod controls;
pub mod filter;
pub mod mapper;
pub mod presets;
pub mod processor;
pub mod shaper;
pub mod tone_stack;

// Re-export main types at crate root
pub use chain::{ChainStage, FuzzChain};
pub use controls::ControlParameters;
pub use filter::{FixedFilter, FixedResponse};
pub use mapper::{MappedSettings, apply_controls, map_controls};
pub use presets::{FACTORY_PRESETS, FactoryPreset, factory_preset, find_factory_preset};
pub use processor::{FuzzPedal, MAX_CHANNELS, SampleRateContext};
pub use shaper::{ShapingCurve, WaveShaper, asymmetric_drive, symmetric_drive};
pub use tone_stack::ToneStack;
