//! # brdoc CLI entry point
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! the subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::classify::{run_classify, ClassifyArgs};
use brdoc_cli::generate::{run_generate, GenerateArgs};
use brdoc_cli::mask::{run_mask, MaskArgs};
use brdoc_cli::output::OutputFormat;
use brdoc_cli::validate::{run_validate, ValidateArgs};

/// Brazilian taxpayer identifier toolkit.
///
/// Masks, classifies, and validates CPF and CNPJ numbers, and generates
/// random valid ones for test data.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format for results on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply the CPF/CNPJ punctuation to the digits of the input.
    Mask(MaskArgs),

    /// Report whether the digit count is a CPF (11) or CNPJ (14).
    Classify(ClassifyArgs),

    /// Validate the check digits of a CPF or CNPJ.
    Validate(ValidateArgs),

    /// Generate random valid identifiers for testing.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, format = ?cli.format, "dispatching");

    let result = match &cli.command {
        Commands::Mask(args) => run_mask(args, cli.format),
        Commands::Classify(args) => run_classify(args, cli.format),
        Commands::Validate(args) => run_validate(args, cli.format),
        Commands::Generate(args) => run_generate(args, cli.format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
