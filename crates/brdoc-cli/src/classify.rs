//! # Classify Subcommand
//!
//! Reports which identifier kind the input's digit count implies. Only the
//! length is inspected; use `validate` to check the digits themselves.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use brdoc_core::{classify, extract_digits, DocumentKind};

use crate::output::{emit, OutputFormat, Report};
use crate::EXIT_OK;

/// Arguments for the classify subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Identifier to classify, masked or bare.
    #[arg(allow_hyphen_values = true)]
    pub document: String,
}

/// Classification of one input.
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub digits: String,
    pub kind: Option<DocumentKind>,
}

impl Report for ClassifyReport {
    fn render_text(&self) -> String {
        match self.kind {
            Some(kind) => kind.to_string(),
            None => "unknown".to_string(),
        }
    }
}

pub fn classify_input(text: &str) -> ClassifyReport {
    let digits = extract_digits(text);
    ClassifyReport {
        kind: classify(&digits),
        digits: digits.into_string(),
    }
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, format: OutputFormat) -> Result<u8> {
    let report = classify_input(&args.document);
    emit(format, &report)?;
    Ok(EXIT_OK)
}
