use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jornada annual work calendar generator.
#[derive(Parser)]
#[command(
    name = "jornada",
    version,
    about = "Annual work calendar generator for cyclic work patterns"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the calendar and write it as JSON.
    Generate(GenerateArgs),
    /// Build the calendar and report consistency problems.
    Validate(ValidateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "jornada.toml")]
    pub config: PathBuf,

    /// Output JSON path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the calendar year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "jornada.toml")]
    pub config: PathBuf,

    /// Override the calendar year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Also print warnings.
    #[arg(short, long)]
    pub warnings: bool,
}
