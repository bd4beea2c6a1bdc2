//! Fuzzcola CLI - run the fuzz pedal over WAV files.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fuzzcola")]
#[command(author, version, about = "Fuzzcola fuzz pedal CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the pedal
    Process(commands::process::ProcessArgs),

    /// List the factory presets
    Presets(commands::presets::PresetsArgs),

    /// List the pedal's parameters
    Params(commands::params::ParamsArgs),

    /// Generate a test sine
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Generate(args) => commands::generate::run(args),
    }
}
