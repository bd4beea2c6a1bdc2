//! Test signal generation command.

use crate::wav::{WavSpec, write_wav};
use anyhow::bail;
use clap::Args;
use fuzzcola_core::db_to_linear;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Frequency in Hz
    #[arg(long, default_value = "1000.0")]
    frequency: f32,

    /// Level in dBFS
    #[arg(long, default_value = "-20.0", allow_hyphen_values = true)]
    level: f32,

    /// Duration in seconds
    #[arg(long, default_value = "1.0")]
    duration: f32,

    /// Sample rate
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Channel count (1 or 2)
    #[arg(long, default_value = "1")]
    channels: u16,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    if !(1..=2).contains(&args.channels) {
        bail!("Channel count must be 1 or 2");
    }
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        bail!("Unsupported bit depth {} (use 16, 24 or 32)", args.bit_depth);
    }

    let signal = sine(args.frequency, args.level, args.duration, args.sample_rate);
    let channels = vec![signal; usize::from(args.channels)];

    println!(
        "Generating {:.0} Hz sine at {:.1} dBFS, {:.2}s -> {}",
        args.frequency,
        args.level,
        args.duration,
        args.output.display()
    );
    write_wav(
        &args.output,
        &channels,
        WavSpec {
            channels: args.channels,
            sample_rate: args.sample_rate,
            bits_per_sample: args.bit_depth,
        },
    )?;

    Ok(())
}

fn sine(frequency: f32, level_db: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    let amplitude = db_to_linear(level_db);
    let sr = sample_rate as f32;
    let len = (duration.max(0.0) * sr) as usize;
    (0..len)
        .map(|i| amplitude * (2.0 * std::f32::consts::PI * frequency * i as f32 / sr).sin())
        .collect()
}
