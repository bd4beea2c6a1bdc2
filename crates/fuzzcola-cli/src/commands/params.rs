//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use fuzzcola_core::{ParamDescriptor, ParameterInfo};
use fuzzcola_effects::{FuzzChain, FuzzPedal};

#[derive(Args)]
pub struct ParamsArgs {}

pub fn run(_args: ParamsArgs) -> anyhow::Result<()> {
    let pedal = FuzzPedal::default();

    println!(
        "  {:>2}  {:12}  {:14}  {:>16}  {:>8}",
        "#", "ID", "Name", "Range", "Default"
    );
    println!(
        "  {:>2}  {:12}  {:14}  {:>16}  {:>8}",
        "-", "--", "----", "-----", "-------"
    );
    for index in 0..pedal.param_count() {
        if let Some(desc) = pedal.param_info(index) {
            println!("{}", format_row(index, &desc));
        }
    }
    if let Some(chain) = pedal.chains().first() {
        println!("\n{}", format_fixed_stages(chain));
    }

    Ok(())
}

/// Corners of the filters that have no user control.
fn format_fixed_stages(chain: &FuzzChain) -> String {
    format!(
        "  Fixed: high-pass {} Hz, low-pass {} Hz",
        chain.pre_high_pass().response().frequency(),
        chain.post_low_pass().response().frequency()
    )
}

fn format_row(index: usize, desc: &ParamDescriptor) -> String {
    let (range, default) = if desc.is_toggle() {
        (
            "off/on".to_string(),
            if desc.default > 0.5 { "on" } else { "off" }.to_string(),
        )
    } else {
        let suffix = desc.unit.suffix();
        (
            format!("{} - {}{}", desc.min, desc.max, suffix),
            format!("{}{}", desc.default, suffix),
        )
    };
    format!(
        "  {:>2}  {:12}  {:14}  {:>16}  {:>8}",
        index, desc.string_id, desc.name, range, default
    )
}
