//! # brdoc-core: Brazilian Taxpayer Identifiers
//!
//! Pure functions and validated newtypes for the two Brazilian taxpayer
//! registry numbers:
//!
//! - **CPF** (Cadastro de Pessoas Físicas): 11 digits, `###.###.###-##`.
//! - **CNPJ** (Cadastro Nacional da Pessoa Jurídica): 14 digits,
//!   `##.###.###/####-##`.
//!
//! ## Pipeline
//!
//! ```text
//! raw text ──► extract_digits ──► DigitString ──► classify ──► DocumentKind
//!                                      │
//!                                      ├──► mask_document ──► MaskedDocument
//!                                      └──► check_cpf / check_cnpj
//!                                                 │
//!                                      checksum::check_digits ◄── generate_*
//! ```
//!
//! Validation and generation share [`checksum::check_digits`]; there is no
//! second implementation of the weighted modulo-11 rule anywhere in the crate,
//! so a generated identifier always passes its validator.
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no global state. Every operation is a pure function.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - "Invalid" is a normal outcome: boolean validators never fail, and the
//!   `check_*` variants return a [`DocumentError`] describing the rejection.
//! - Generated identifiers come from a non-cryptographic RNG. They are test
//!   data, not issued registrations.

/// Implement `Deserialize` for string newtypes that must validate their
/// contents. Deserializes a plain `String`, then routes it through the
/// type's `new()` constructor so invalid values are rejected at
/// deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod checksum;
pub mod digits;
pub mod document;
pub mod error;
pub mod generate;
pub mod kind;
pub mod mask;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use checksum::{check_digits, compute_check_digit, WeightScheme, CNPJ_WEIGHTS};
pub use digits::{extract_digits, DigitString};
pub use document::{Cnpj, Cpf, Document};
pub use error::DocumentError;
pub use generate::{generate, generate_cnpj, generate_cpf, HEADQUARTERS_BRANCH};
pub use kind::{classify, DocumentKind};
pub use mask::{mask_document, MaskedDocument};
pub use validate::{check_cnpj, check_cpf, is_valid_cnpj, is_valid_cpf};
