//! # Mask Subcommand
//!
//! Applies the progressive CPF/CNPJ mask to whatever digits the input holds.
//! The terminal analogue of re-masking a text field on every keystroke.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use brdoc_core::mask::{mask_as, mask_document};
use brdoc_core::{extract_digits, DocumentKind};

use crate::output::{emit, OutputFormat, Report};
use crate::EXIT_OK;

/// Arguments for the mask subcommand.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Text to mask. Non-digit characters are ignored.
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Force the CPF or CNPJ pattern instead of choosing by digit count.
    #[arg(long)]
    pub kind: Option<DocumentKind>,
}

/// Result of masking one input.
#[derive(Debug, Serialize)]
pub struct MaskReport {
    pub input: String,
    pub digits: String,
    pub masked: String,
}

impl Report for MaskReport {
    fn render_text(&self) -> String {
        self.masked.clone()
    }
}

/// Build the report for `text`.
pub fn mask_input(text: &str, kind: Option<DocumentKind>) -> MaskReport {
    let masked = match kind {
        Some(kind) => mask_as(kind, &extract_digits(text)),
        None => mask_document(text),
    };
    MaskReport {
        input: text.to_string(),
        digits: masked.digits().into_string(),
        masked: masked.into_string(),
    }
}

/// Execute the mask subcommand.
pub fn run_mask(args: &MaskArgs, format: OutputFormat) -> Result<u8> {
    let report = mask_input(&args.text, args.kind);
    tracing::debug!(digits = report.digits.len(), "masked input");
    emit(format, &report)?;
    Ok(EXIT_OK)
}
