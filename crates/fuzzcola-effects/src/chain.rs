//! The per-channel fuzz signal chain.
//!
//! ```text
//! in ─► input gain ─► HPF 30 Hz ─► tanh (sym) ─► tanh (asym) ─► tone stack ─► LPF 5.5 kHz ─► output gain ─► out
//! ```
//!
//! The input gain (sustain) drives the clippers; the high-pass keeps DC and
//! sub-bass from biasing them; the low-pass tames the fizz left by clipping.
//!
//! Blocks run stage-sequentially: the whole block passes through one stage
//! before the next stage sees it.

use fuzzcola_core::{Effect, GainStage};

use crate::{
    FixedFilter, FixedResponse, MappedSettings, ShapingCurve, ToneStack, WaveShaper,
};

/// Corner of the DC-blocking high-pass in Hz.
pub const PRE_HIGH_PASS_HZ: f32 = 30.0;
/// Q of the DC-blocking high-pass (Butterworth).
pub const PRE_HIGH_PASS_Q: f32 = core::f32::consts::FRAC_1_SQRT_2;
/// Corner of the post-clipping low-pass in Hz.
pub const POST_LOW_PASS_HZ: f32 = 5500.0;

/// The seven stages, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainStage {
    /// Sustain gain.
    InputGain,
    /// 30 Hz high-pass.
    PreHighPass,
    /// Symmetric tanh.
    Clipper1,
    /// Asymmetric tanh.
    Clipper2,
    /// Low/high shelf pair.
    ToneStack,
    /// 5.5 kHz first-order low-pass.
    PostLowPass,
    /// Volume.
    OutputGain,
}

impl ChainStage {
    /// Every stage, in processing order.
    pub const ALL: [ChainStage; 7] = [
        ChainStage::InputGain,
        ChainStage::PreHighPass,
        ChainStage::Clipper1,
        ChainStage::Clipper2,
        ChainStage::ToneStack,
        ChainStage::PostLowPass,
        ChainStage::OutputGain,
    ];

    /// Position in the chain, 0 – 6.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ChainStage::InputGain => "Input Gain",
            ChainStage::PreHighPass => "Pre High-Pass",
            ChainStage::Clipper1 => "Clipper 1",
            ChainStage::Clipper2 => "Clipper 2",
            ChainStage::ToneStack => "Tone Stack",
            ChainStage::PostLowPass => "Post Low-Pass",
            ChainStage::OutputGain => "Output Gain",
        }
    }
}

/// One channel's worth of fuzz.
///
/// # Example
///
/// ```rust
/// use fuzzcola_core::Effect;
/// use fuzzcola_effects::{FuzzChain, MappedSettings};
///
/// let mut chain = FuzzChain::new(48000.0);
/// chain.apply(&MappedSettings { input_gain_db: 42.0, output_gain_db: 0.0, tone: 0.42 });
///
/// let mut block = [0.0f32; 64];
/// chain.process_block_inplace(&mut block);
/// assert!(block.iter().all(|&s| s == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct FuzzChain {
    input_gain: GainStage,
    pre_high_pass: FixedFilter,
    clipper1: WaveShaper,
    clipper2: WaveShaper,
    tone_stack: ToneStack,
    post_low_pass: FixedFilter,
    output_gain: GainStage,
    sample_rate: f32,
}

impl FuzzChain {
    /// Build a chain at `sample_rate` with 0 dB gains and neutral tone.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            input_gain: GainStage::new(sample_rate, 0.0),
            pre_high_pass: FixedFilter::new(
                FixedResponse::HighPass {
                    frequency: PRE_HIGH_PASS_HZ,
                    q: PRE_HIGH_PASS_Q,
                },
                sample_rate,
            ),
            clipper1: WaveShaper::new(ShapingCurve::Symmetric),
            clipper2: WaveShaper::new(ShapingCurve::Asymmetric),
            tone_stack: ToneStack::new(sample_rate),
            post_low_pass: FixedFilter::new(
                FixedResponse::FirstOrderLowPass {
                    frequency: POST_LOW_PASS_HZ,
                },
                sample_rate,
            ),
            output_gain: GainStage::new(sample_rate, 0.0),
            sample_rate,
        }
    }

    /// Redesign every stage for `sample_rate` and clear all state.
    ///
    /// Gain ramps snap to their targets and the tone stack returns to its
    /// default tone.
    pub fn prepare(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.input_gain.set_sample_rate(sample_rate);
        self.pre_high_pass.set_sample_rate(sample_rate);
        self.tone_stack.prepare(sample_rate);
        self.post_low_pass.set_sample_rate(sample_rate);
        self.output_gain.set_sample_rate(sample_rate);
        self.reset();
    }

    /// Push mapped settings to the gain stages and tone stack.
    pub fn apply(&mut self, settings: &MappedSettings) {
        self.input_gain.set_gain_db(settings.input_gain_db);
        self.output_gain.set_gain_db(settings.output_gain_db);
        self.tone_stack.set_tone(settings.tone);
    }

    /// Jump both gain stages to their targets.
    pub fn snap_gains(&mut self) {
        self.input_gain.snap();
        self.output_gain.snap();
    }

    /// Run a block through a single stage.
    pub fn process_stage(&mut self, stage: ChainStage, block: &mut [f32]) {
        match stage {
            ChainStage::InputGain => self.input_gain.process_block_inplace(block),
            ChainStage::PreHighPass => self.pre_high_pass.process_block_inplace(block),
            ChainStage::Clipper1 => self.clipper1.process_block_inplace(block),
            ChainStage::Clipper2 => self.clipper2.process_block_inplace(block),
            ChainStage::ToneStack => self.tone_stack.process_block_inplace(block),
            ChainStage::PostLowPass => self.post_low_pass.process_block_inplace(block),
            ChainStage::OutputGain => self.output_gain.process_block_inplace(block),
        }
    }

    /// Sample rate the chain is designed for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Input (sustain) gain stage.
    pub fn input_gain(&self) -> &GainStage {
        &self.input_gain
    }

    /// Output (volume) gain stage.
    pub fn output_gain(&self) -> &GainStage {
        &self.output_gain
    }

    /// The tone stack.
    pub fn tone_stack(&self) -> &ToneStack {
        &self.tone_stack
    }

    /// The 30 Hz high-pass.
    pub fn pre_high_pass(&self) -> &FixedFilter {
        &self.pre_high_pass
    }

    /// The 5.5 kHz low-pass.
    pub fn post_low_pass(&self) -> &FixedFilter {
        &self.post_low_pass
    }
}

impl Effect for FuzzChain {
    fn process(&mut self, input: f32) -> f32 {
        let x = self.input_gain.process(input);
        let x = self.pre_high_pass.process(x);
        let x = self.clipper1.process(x);
        let x = self.clipper2.process(x);
        let x = self.tone_stack.process(x);
        let x = self.post_low_pass.process(x);
        self.output_gain.process(x)
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for stage in ChainStage::ALL {
            self.process_stage(stage, buffer);
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.prepare(sample_rate);
    }

    fn reset(&mut self) {
        self.input_gain.reset();
        self.pre_high_pass.reset();
        self.clipper1.reset();
        self.clipper2.reset();
        self.tone_stack.reset();
        self.post_low_pass.reset();
        self.output_gain.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(input_gain_db: f32, tone: f32) -> MappedSettings {
        MappedSettings {
            input_gain_db,
            output_gain_db: 0.0,
            tone,
        }
    }

    #[test]
    fn test_stage_order() {
        let names: Vec<&str> = ChainStage::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "Input Gain",
                "Pre High-Pass",
                "Clipper 1",
                "Clipper 2",
                "Tone Stack",
                "Post Low-Pass",
                "Output Gain"
            ]
        );
        for (i, stage) in ChainStage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn test_silence_in_silence_out() {
        let mut chain = FuzzChain::new(44100.0);
        chain.apply(&settings(45.0, 1.0));
        chain.snap_gains();
        let mut block = [0.0f32; 256];
        chain.process_block_inplace(&mut block);
        assert!(block.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_block_matches_per_sample() {
        let input: Vec<f32> = (0..256)
            .map(|i| 0.1 * libm::sinf(i as f32 * 0.13))
            .collect();
        let mut a = FuzzChain::new(48000.0);
        a.apply(&settings(40.0, 0.3));
        let mut b = a.clone();

        let mut block = input.clone();
        a.process_block_inplace(&mut block);
        let per_sample: Vec<f32> = input.iter().map(|&x| b.process(x)).collect();
        for (x, y) in block.iter().zip(per_sample.iter()) {
            assert!((x - y).abs() < 1e-5, "{x} vs {y}");
        }
    }

    #[test]
    fn test_output_is_bounded() {
        let mut chain = FuzzChain::new(48000.0);
        chain.apply(&settings(45.0, 1.0));
        chain.snap_gains();
        let mut block: Vec<f32> = (0..4800)
            .map(|i| libm::sinf(i as f32 * 0.05))
            .collect();
        chain.process_block_inplace(&mut block);
        // Asymmetric clipper peaks at 0.8·(1 + tanh 1.25); the treble shelf
        // and filter overshoot add at most a few dB on top.
        assert!(block.iter().all(|s| s.is_finite() && s.abs() < 4.0));
    }

    #[test]
    fn test_apply_moves_gain_targets() {
        let mut chain = FuzzChain::new(48000.0);
        chain.apply(&settings(30.0, 0.5));
        assert!((chain.input_gain().gain_db() - 30.0).abs() < 1e-3);
        assert!(!chain.input_gain().is_settled());
        chain.snap_gains();
        assert!(chain.input_gain().is_settled());
    }

    #[test]
    fn test_prepare_clears_state() {
        let mut chain = FuzzChain::new(44100.0);
        chain.apply(&settings(40.0, 0.9));
        let mut block = [0.5f32; 64];
        chain.process_block_inplace(&mut block);

        chain.prepare(96000.0);
        assert_eq!(chain.sample_rate(), 96000.0);
        assert_eq!(chain.tone_stack().tone(), 0.5);
        assert!(chain.input_gain().is_settled());
        let mut silence = [0.0f32; 64];
        chain.process_block_inplace(&mut silence);
        assert!(silence.iter().all(|&s| s == 0.0));
    }
}
