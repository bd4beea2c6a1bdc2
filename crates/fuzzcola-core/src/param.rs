//! Linear ramps for zipper-free gain changes.
//!
//! Gains are updated once per block, so a step change at a block boundary
//! would click. [`LinearRamp`] spreads each change over a fixed number of
//! samples at a constant rate.
//!
//! ## Usage
//!
//! ```rust
//! use fuzzcola_core::LinearRamp;
//!
//! let mut gain = LinearRamp::new(1.0, 48000.0, 1.0);
//! gain.set_target(0.5);
//!
//! // 1 ms at 48 kHz
//! for _ in 0..48 {
//!     let _g = gain.advance();
//! }
//! assert_eq!(gain.get(), 0.5);
//! ```

/// Value that walks toward its target in equal steps.
///
/// The ramp spans `floor(ramp_ms / 1000 * sample_rate)` samples. Asking for
/// the target already in effect leaves a running ramp untouched.
#[derive(Debug, Clone)]
pub struct LinearRamp {
    value: f32,
    target: f32,
    step: f32,
    remaining: u32,
    sample_rate: f32,
    ramp_ms: f32,
}

impl LinearRamp {
    /// Settled ramp holding `initial`.
    pub fn new(initial: f32, sample_rate: f32, ramp_ms: f32) -> Self {
        Self {
            value: initial,
            target: initial,
            step: 0.0,
            remaining: 0,
            sample_rate,
            ramp_ms,
        }
    }

    /// Start a ramp from the current value to `target`.
    pub fn set_target(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.target = target;

        match self.ramp_length() {
            0 => self.snap_to_target(),
            len => {
                self.step = (target - self.value) / len as f32;
                self.remaining = len;
            }
        }
    }

    /// Change the sample rate. A ramp in flight lands on its target.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.snap_to_target();
    }

    /// Ramp length in samples at the current sample rate.
    pub fn ramp_length(&self) -> u32 {
        (self.ramp_ms / 1000.0 * self.sample_rate) as u32
    }

    /// Step once and return the new value.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        match self.remaining {
            0 => {}
            1 => {
                self.value = self.target;
                self.remaining = 0;
            }
            _ => {
                self.value += self.step;
                self.remaining -= 1;
            }
        }
        self.value
    }

    /// Value as of the last step.
    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Value the ramp is heading for.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// No steps left.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.remaining == 0
    }

    /// Abandon the ramp and hold the target.
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.step = 0.0;
        self.remaining = 0;
    }
}
