//! Factory preset listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use fuzzcola_effects::{FACTORY_PRESETS, FactoryPreset, find_factory_preset};

#[derive(Args)]
pub struct PresetsArgs {
    /// Show a single preset by name
    #[arg(value_name = "PRESET")]
    name: Option<String>,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    let selected: Vec<(usize, &FactoryPreset)> = match &args.name {
        Some(name) => {
            let found = find_factory_preset(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown preset: {}", name))?;
            vec![found]
        }
        None => FACTORY_PRESETS.iter().enumerate().collect(),
    };

    println!(
        "  {:>2}  {:18}  {:>7}  {:>5}  {:>8}  {}",
        "#", "Name", "Sustain", "Tone", "Volume", "Tone Stack"
    );
    println!(
        "  {:>2}  {:18}  {:>7}  {:>5}  {:>8}  {}",
        "-", "----", "-------", "----", "------", "----------"
    );
    for (index, preset) in selected {
        println!("{}", format_row(index, preset));
    }

    Ok(())
}

fn format_row(index: usize, preset: &FactoryPreset) -> String {
    format!(
        "  {:>2}  {:18}  {:>7.2}  {:>5.2}  {:>+5.1} dB  {}",
        index,
        preset.name,
        preset.sustain,
        preset.tone,
        preset.volume_db,
        if preset.tone_enabled { "on" } else { "off" }
    )
}
