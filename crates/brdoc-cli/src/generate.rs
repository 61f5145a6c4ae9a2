//! # Generate Subcommand
//!
//! Prints random, checksum-valid identifiers for test fixtures. Values are
//! drawn from a non-cryptographic RNG and are never real registrations.
//!
//! ```bash
//! brdoc generate cpf
//! brdoc generate cnpj --count 10 --bare
//! brdoc generate cpf --seed 42      # reproducible
//! ```

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use brdoc_core::generate::generate_digits_with;
use brdoc_core::mask::mask_as;
use brdoc_core::DocumentKind;

use crate::output::{emit, OutputFormat, Report};
use crate::EXIT_OK;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Kind of identifier to generate (cpf or cnpj).
    pub kind: DocumentKind,

    /// Number of identifiers to print.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=10_000)
    )]
    pub count: u32,

    /// Print bare digits instead of the masked form.
    #[arg(long)]
    pub bare: bool,

    /// Seed the RNG for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Generated identifiers.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub kind: DocumentKind,
    pub documents: Vec<String>,
}

impl Report for GenerateReport {
    fn render_text(&self) -> String {
        self.documents.join("\n")
    }
}

/// Draw `args.count` identifiers from `rng`.
pub fn generate_documents<R: Rng + ?Sized>(args: &GenerateArgs, rng: &mut R) -> GenerateReport {
    let documents = (0..args.count)
        .map(|_| {
            let digits = generate_digits_with(args.kind, rng);
            if args.bare {
                digits.into_string()
            } else {
                mask_as(args.kind, &digits).into_string()
            }
        })
        .collect();
    GenerateReport {
        kind: args.kind,
        documents,
    }
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, format: OutputFormat) -> Result<u8> {
    let report = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded RNG");
            generate_documents(args, &mut StdRng::seed_from_u64(seed))
        }
        None => generate_documents(args, &mut rand::thread_rng()),
    };
    tracing::info!(kind = %args.kind, count = args.count, "generated documents");
    emit(format, &report)?;
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use brdoc_core::{is_valid_cnpj, is_valid_cpf};

    use super::*;

    fn args(kind: DocumentKind, count: u32, bare: bool) -> GenerateArgs {
        GenerateArgs {
            kind,
            count,
            bare,
            seed: None,
        }
    }

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let report = generate_documents(&args(DocumentKind::Cpf, 25, false), &mut rng);
        assert_eq!(report.documents.len(), 25);
        assert!(report.documents.iter().all(|d| is_valid_cpf(d)));
    }

    #[test]
    fn bare_cnpj_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        let report = generate_documents(&args(DocumentKind::Cnpj, 5, true), &mut rng);
        for doc in &report.documents {
            assert_eq!(doc.len(), 14);
            assert!(doc.bytes().all(|b| b.is_ascii_digit()));
            assert_eq!(&doc[8..12], "0001");
            assert!(is_valid_cnpj(doc));
        }
    }

    #[test]
    fn text_is_one_per_line() {
        let mut rng = StdRng::seed_from_u64(9);
        let report = generate_documents(&args(DocumentKind::Cpf, 3, false), &mut rng);
        assert_eq!(report.render_text().lines().count(), 3);
    }

    #[test]
    fn seeded_run_succeeds() {
        let mut a = args(DocumentKind::Cnpj, 2, false);
        a.seed = Some(11);
        assert_eq!(run_generate(&a, OutputFormat::Text).unwrap(), EXIT_OK);
    }
}
