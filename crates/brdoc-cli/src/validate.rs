//! # Validate Subcommand
//!
//! Validates one identifier. The kind is inferred from the digit count
//! (11 → CPF, 14 → CNPJ) unless `--kind` forces one; any other count is the
//! "invalid digit count" outcome.
//!
//! Exit codes: `0` valid, `2` invalid or unclassifiable.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use brdoc_core::mask::mask_as;
use brdoc_core::validate::check_digit_string;
use brdoc_core::{classify, extract_digits, DocumentError, DocumentKind};

use crate::output::{emit, OutputFormat, Report};
use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifier to validate, masked or bare.
    #[arg(allow_hyphen_values = true)]
    pub document: String,

    /// Validate as this kind instead of inferring it from the digit count.
    #[arg(long)]
    pub kind: Option<DocumentKind>,
}

/// Outcome of validating one input.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub digits: String,
    pub kind: Option<DocumentKind>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Report for ValidationReport {
    fn render_text(&self) -> String {
        match (self.kind, self.valid) {
            (Some(kind), true) => format!(
                "{kind} valid: {}",
                self.formatted.as_deref().unwrap_or(&self.digits)
            ),
            (Some(kind), false) => format!(
                "{kind} invalid: {}",
                self.reason.as_deref().unwrap_or("check digits do not match")
            ),
            (None, _) => format!("invalid digit count: {}", self.digits.len()),
        }
    }
}

/// Validate `input`, inferring the kind unless `forced` is given.
pub fn validate_input(input: &str, forced: Option<DocumentKind>) -> ValidationReport {
    let digits = extract_digits(input);
    let kind = forced.or_else(|| classify(&digits));

    let outcome = match kind {
        Some(kind) => check_digit_string(kind, digits.clone()),
        None => Err(DocumentError::UnknownLength(digits.len())),
    };

    let (valid, formatted, reason) = match (&outcome, kind) {
        (Ok(valid_digits), Some(kind)) => {
            (true, Some(mask_as(kind, valid_digits).into_string()), None)
        }
        (Err(e), _) => (false, None, Some(e.to_string())),
        (Ok(_), None) => (false, None, None),
    };

    ValidationReport {
        input: input.to_string(),
        digits: digits.into_string(),
        kind,
        valid,
        formatted,
        reason,
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, format: OutputFormat) -> Result<u8> {
    let report = validate_input(&args.document, args.kind);
    match report.kind {
        Some(kind) => tracing::info!(%kind, valid = report.valid, "validated document"),
        None => tracing::info!(digits = report.digits.len(), "unclassifiable digit count"),
    }
    emit(format, &report)?;
    Ok(if report.valid { EXIT_OK } else { EXIT_INVALID })
}
