//! # Error Types
//!
//! Rejection reasons for identifier parsing and validation. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The boolean validators collapse every variant to `false`; the typed
//! constructors ([`crate::Cpf::new`], [`crate::Cnpj::new`],
//! [`crate::Document::new`]) surface them so callers can report why.

use thiserror::Error;

use crate::kind::DocumentKind;

/// Why a candidate identifier was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The digit count does not match the identifier kind.
    #[error("{kind} must have {expected} digits, got {actual}")]
    WrongLength {
        /// Kind the input was checked against.
        kind: DocumentKind,
        /// Required digit count for `kind`.
        expected: usize,
        /// Digit count found after extraction.
        actual: usize,
    },

    /// Every digit is the same. These sequences pass the checksum but are
    /// never issued.
    #[error("{kind} made of a single repeated digit is not valid")]
    RepeatedDigits {
        /// Kind the input was checked against.
        kind: DocumentKind,
    },

    /// The trailing two digits disagree with the recomputed check digits.
    #[error("{kind} check digits mismatch: expected {expected}, got {actual}")]
    CheckDigitMismatch {
        /// Kind the input was checked against.
        kind: DocumentKind,
        /// Check digits computed from the base digits.
        expected: String,
        /// Check digits supplied in the input.
        actual: String,
    },

    /// The digit count matches neither CPF (11) nor CNPJ (14).
    #[error("cannot classify identifier with {0} digits (expected 11 for CPF or 14 for CNPJ)")]
    UnknownLength(usize),

    /// A strict digit string contained something other than `0`-`9`.
    #[error("not a digit string: {0:?}")]
    NonDigit(String),

    /// A kind name other than `cpf` or `cnpj`.
    #[error("unknown document kind: {0:?}")]
    UnknownKind(String),
}
