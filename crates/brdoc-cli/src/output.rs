//! # Output Rendering
//!
//! Every subcommand builds a serializable report and hands it here. Text mode
//! prints the report's human line; JSON mode prints the report itself.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

/// A command result that can be printed in either format.
pub trait Report: Serialize {
    /// Human-readable rendering, without a trailing newline.
    fn render_text(&self) -> String;
}

/// Render `report` in the requested format.
pub fn render(format: OutputFormat, report: &impl Report) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report as JSON")
        }
    }
}

/// Render `report` and write it to stdout.
pub fn emit(format: OutputFormat, report: &impl Report) -> Result<()> {
    let rendered = render(format, report)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write to stdout")?;
    Ok(())
}
