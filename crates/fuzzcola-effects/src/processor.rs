//! Block processor: control snapshot, hard bypass, and channel dispatch.
//!
//! [`FuzzPedal`] owns one [`FuzzChain`] per channel (at most two) and the
//! current [`ControlParameters`]. Each call to [`FuzzPedal::process_block`]
//!
//! 1. returns immediately when the pedal is off, leaving the buffers
//!    bit-identical (true bypass);
//! 2. maps the controls onto every chain;
//! 3. runs channel 0 through chain 0 and, for stereo, channel 1 through
//!    chain 1. The chains share no state.
//!
//! Channels beyond the second are left alone. Nothing here allocates after
//! [`FuzzPedal::prepare`].

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use fuzzcola_core::{Effect, ParamDescriptor, ParameterInfo};

use crate::controls::{self, PARAM_COUNT};
use crate::{ControlParameters, FuzzChain, apply_controls, factory_preset};

/// Most channels the pedal processes.
pub const MAX_CHANNELS: usize = 2;

/// Host configuration handed to [`FuzzPedal::prepare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRateContext {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest block the host will pass.
    pub max_block_size: usize,
    /// Channel count the host will pass.
    pub num_channels: usize,
}

impl SampleRateContext {
    /// Create a context.
    pub const fn new(sample_rate: f64, max_block_size: usize, num_channels: usize) -> Self {
        Self {
            sample_rate,
            max_block_size,
            num_channels,
        }
    }
}

impl Default for SampleRateContext {
    fn default() -> Self {
        Self::new(44100.0, 512, 2)
    }
}

/// The fuzz pedal.
///
/// # Example
///
/// ```rust
/// use fuzzcola_effects::{ControlParameters, FuzzPedal, SampleRateContext};
///
/// let mut pedal = FuzzPedal::new(SampleRateContext::new(44100.0, 128, 1));
/// pedal.set_controls(ControlParameters { pedal_on: false, ..ControlParameters::default() });
///
/// let mut mono = [0.25f32; 128];
/// pedal.process_block(&mut [&mut mono[..]]);
/// assert!(mono.iter().all(|&s| s == 0.25)); // bypassed
/// ```
#[derive(Debug, Clone)]
pub struct FuzzPedal {
    chains: Vec<FuzzChain>,
    controls: ControlParameters,
    context: SampleRateContext,
    scratch: Vec<f32>,
}

impl FuzzPedal {
    /// Create a pedal with default controls, prepared for `context`.
    pub fn new(context: SampleRateContext) -> Self {
        let mut pedal = Self {
            chains: Vec::new(),
            controls: ControlParameters::default(),
            context,
            scratch: Vec::new(),
        };
        pedal.prepare(context);
        pedal
    }

    /// Size the pedal for `context` and reset all DSP state.
    ///
    /// Designs every filter for the new sample rate, clears filter history,
    /// maps the current controls and snaps the gain ramps to them. Allocates;
    /// call outside the audio path.
    pub fn prepare(&mut self, context: SampleRateContext) {
        let sample_rate = context.sample_rate as f32;
        let num_chains = context.num_channels.clamp(1, MAX_CHANNELS);

        self.context = context;
        self.chains = vec![FuzzChain::new(sample_rate); num_chains];
        for chain in &mut self.chains {
            chain.prepare(sample_rate);
        }
        self.scratch = vec![0.0; context.max_block_size.max(1) * num_chains];

        self.update_parameters();
        for chain in &mut self.chains {
            chain.snap_gains();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = context.sample_rate,
            max_block_size = context.max_block_size,
            channels = num_chains,
            "pedal prepared"
        );
    }

    /// Context from the last [`prepare`](Self::prepare).
    pub fn context(&self) -> SampleRateContext {
        self.context
    }

    /// Current controls.
    pub fn controls(&self) -> ControlParameters {
        self.controls
    }

    /// Replace the controls. Values are clamped; they take effect on the next
    /// processed block.
    pub fn set_controls(&mut self, controls: ControlParameters) {
        self.controls = controls.sanitized();
    }

    /// Load factory preset `index` into the controls.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn apply_factory_preset(&mut self, index: usize) -> bool {
        let Some(preset) = factory_preset(index) else {
            return false;
        };
        self.controls = preset.controls();

        #[cfg(feature = "tracing")]
        tracing::debug!(index, name = preset.name, "factory preset applied");

        true
    }

    /// Map the current controls onto every chain.
    ///
    /// Called at the top of every non-bypassed block. Calling it again with
    /// unchanged controls has no effect.
    pub fn update_parameters(&mut self) {
        apply_controls(&self.controls, &mut self.chains);
    }

    /// Chains in channel order.
    pub fn chains(&self) -> &[FuzzChain] {
        &self.chains
    }

    /// Process planar audio in place.
    ///
    /// One channel runs through chain 0. Two or more run channel 0 through
    /// chain 0 and channel 1 through chain 1 (when prepared for stereo); any
    /// further channels are left untouched.
    pub fn process_block(&mut self, channels: &mut [&mut [f32]]) {
        if !self.controls.pedal_on {
            return;
        }
        self.update_parameters();

        for (chain, channel) in self.chains.iter_mut().zip(channels.iter_mut()) {
            chain.process_block_inplace(channel);
        }
    }

    /// Process a host buffer whose first `num_input_channels` channels carry
    /// input.
    ///
    /// Output-only channels are cleared before anything else, so they read as
    /// silence even while bypassed. The remaining channels are handled as in
    /// [`process_block`](Self::process_block).
    pub fn process_block_with_inputs(
        &mut self,
        channels: &mut [&mut [f32]],
        num_input_channels: usize,
    ) {
        let num_inputs = num_input_channels.min(channels.len());
        for channel in channels.iter_mut().skip(num_inputs) {
            channel.fill(0.0);
        }
        self.process_block(&mut channels[..num_inputs]);
    }

    /// Process interleaved audio in place.
    ///
    /// Frames are de-interleaved into preallocated scratch in chunks of at
    /// most `max_block_size`, processed, and written back. Only the first
    /// [`MAX_CHANNELS`] channels of each frame are touched.
    pub fn process_interleaved(&mut self, samples: &mut [f32], num_channels: usize) {
        if num_channels == 0 || !self.controls.pedal_on {
            return;
        }
        let block_size = self.context.max_block_size.max(1);
        let active = num_channels.min(self.chains.len());
        let frame_count = samples.len() / num_channels;
        let mut scratch = core::mem::take(&mut self.scratch);

        let mut start = 0;
        while start < frame_count {
            let frames = (frame_count - start).min(block_size);
            let chunk = &mut samples[start * num_channels..(start + frames) * num_channels];

            let (first, rest) = scratch.split_at_mut(block_size);
            let planar0 = &mut first[..frames];
            for (frame, slot) in chunk.chunks_exact(num_channels).zip(planar0.iter_mut()) {
                *slot = frame[0];
            }
            if active > 1 {
                let planar1 = &mut rest[..frames];
                for (frame, slot) in chunk.chunks_exact(num_channels).zip(planar1.iter_mut()) {
                    *slot = frame[1];
                }
                self.process_block(&mut [planar0, planar1]);
            } else {
                self.process_block(&mut [planar0]);
            }

            for (ch, planar) in scratch.chunks(block_size).take(active).enumerate() {
                for (frame, &value) in chunk.chunks_exact_mut(num_channels).zip(planar.iter()) {
                    frame[ch] = value;
                }
            }
            start += frames;
        }
        self.scratch = scratch;
    }

    /// Clear all filter history and snap gain ramps.
    pub fn reset(&mut self) {
        for chain in &mut self.chains {
            chain.reset();
        }
    }

    /// Processing latency in samples. The pedal has none.
    pub fn latency_samples(&self) -> usize {
        0
    }
}

impl Default for FuzzPedal {
    fn default() -> Self {
        Self::new(SampleRateContext::default())
    }
}

impl ParameterInfo for FuzzPedal {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        controls::descriptor(index)
    }

    fn get_param(&self, index: usize) -> f32 {
        self.controls.get(index)
    }

    fn set_param(&mut self, index: usize, value: f32) {
        self.controls.set(index, value);
    }
}
