//! File-based pedal processing command.

use crate::wav::{WavSpec, read_wav, write_wav};
use anyhow::{Context, bail};
use clap::Args;
use fuzzcola_config::PedalSettings;
use fuzzcola_core::linear_to_db;
use fuzzcola_effects::{FuzzPedal, MAX_CHANNELS, SampleRateContext};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

const DEFAULT_BLOCK_SIZE: usize = 512;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Factory preset name (e.g. "Wall Of Sound")
    #[arg(short, long)]
    preset: Option<String>,

    /// Pedal settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sustain, 0-1
    #[arg(long)]
    sustain: Option<f32>,

    /// Tone, 0-1
    #[arg(long)]
    tone: Option<f32>,

    /// Volume in dB, -60 to 12
    #[arg(long, allow_hyphen_values = true)]
    volume: Option<f32>,

    /// Park the tone stack at its neutral setting
    #[arg(long)]
    tone_off: bool,

    /// Switch the pedal off (output equals input)
    #[arg(long)]
    bypass: bool,

    /// Processing block size
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

impl ProcessArgs {
    /// Command-line flags as a settings layer.
    fn overrides(&self) -> PedalSettings {
        PedalSettings {
            preset: self.preset.clone(),
            sustain: self.sustain,
            tone: self.tone,
            volume_db: self.volume,
            pedal_on: self.bypass.then_some(false),
            tone_enabled: self.tone_off.then_some(false),
            block_size: self.block_size,
        }
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        bail!("Unsupported bit depth {} (use 16, 24 or 32)", args.bit_depth);
    }

    let file_settings = match &args.config {
        Some(path) => PedalSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => PedalSettings::default(),
    };
    let settings = file_settings.merged_with(args.overrides());
    let controls = settings.resolve()?;
    let block_size = settings.block_size.unwrap_or(DEFAULT_BLOCK_SIZE);
    if block_size == 0 {
        bail!("Block size must be at least 1");
    }

    println!("Reading {}...", args.input.display());
    let (mut channels, spec) = read_wav(&args.input)?;
    if channels.len() > MAX_CHANNELS {
        bail!(
            "{} has {} channels; only mono and stereo are supported",
            args.input.display(),
            channels.len()
        );
    }
    let frames = channels.first().map_or(0, Vec::len);

    println!(
        "  {} frames x {} ch, {} Hz, {:.2}s",
        frames,
        channels.len(),
        spec.sample_rate,
        frames as f32 / spec.sample_rate as f32
    );

    let input_stats: Vec<(f32, f32)> = channels.iter().map(|c| (rms(c), peak(c))).collect();

    let mut pedal = FuzzPedal::new(SampleRateContext::new(
        f64::from(spec.sample_rate),
        block_size,
        channels.len(),
    ));
    pedal.set_controls(controls);

    let context = pedal.context();
    tracing::info!(
        sustain = controls.sustain,
        tone = controls.tone,
        volume_db = controls.volume_db,
        pedal_on = controls.pedal_on,
        tone_enabled = controls.tone_enabled,
        sample_rate = context.sample_rate,
        channels = context.num_channels,
        block_size = context.max_block_size,
        "processing"
    );

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut start = 0;
    while start < frames {
        let end = (start + block_size).min(frames);
        let mut block: Vec<&mut [f32]> = channels
            .iter_mut()
            .map(|channel| &mut channel[start..end])
            .collect();
        pedal.process_block(&mut block);
        start = end;
        pb.set_position(start as u64);
    }

    pb.finish_with_message("done");

    println!("\nStats:");
    for (ch, (channel, (in_rms, in_peak))) in channels.iter().zip(input_stats).enumerate() {
        println!(
            "  ch{}  Input:  RMS {:.1} dB, Peak {:.1} dB",
            ch,
            linear_to_db(in_rms),
            linear_to_db(in_peak)
        );
        println!(
            "  ch{}  Output: RMS {:.1} dB, Peak {:.1} dB",
            ch,
            linear_to_db(rms(channel)),
            linear_to_db(peak(channel))
        );
    }

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth,
        ..spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &channels, out_spec)?;
    tracing::info!(output = %args.output.display(), frames, "done");

    Ok(())
}

pub(crate) fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

pub(crate) fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}
