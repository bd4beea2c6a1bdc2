//! Fuzzcola Core - DSP primitives for the fuzz pedal
//!
//! This crate provides the building blocks the pedal's signal chain is made
//! of, designed for real-time audio processing with zero allocation in the
//! audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for every processing stage
//!
//! ## Gain Staging
//!
//! - [`LinearRamp`] - Constant-rate gain ramps
//! - [`GainStage`] - dB-controlled gain with a click-free ramp
//!
//! ## Filters
//!
//! - [`Biquad`] - Second-order IIR filter
//! - Coefficient designs: [`highpass_coefficients`], [`first_order_lowpass_coefficients`],
//!   [`low_shelf_coefficients`], [`high_shelf_coefficients`]
//!
//! ## Parameter Introspection
//!
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Index-based parameter discovery for hosts
//!
//! ## Utilities
//!
//! - Math functions: [`db_to_linear`], [`linear_to_db`], [`lerp`], [`flush_denormal`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! fuzzcola-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Object-safe traits**: Dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod effect;
pub mod gain;
pub mod math;
pub mod param;
pub mod param_info;

// Re-export main types at crate root
pub use biquad::{
    Biquad, Coefficients, first_order_lowpass_coefficients, high_shelf_coefficients,
    highpass_coefficients, low_shelf_coefficients,
};
pub use effect::Effect;
pub use gain::GainStage;
pub use math::{db_to_linear, flush_denormal, lerp, linear_to_db};
pub use param::LinearRamp;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamUnit, ParameterInfo};
