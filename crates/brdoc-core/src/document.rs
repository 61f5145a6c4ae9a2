//! # Validated Identifier Newtypes
//!
//! [`Cpf`] and [`Cnpj`] can only be built from input that passes the
//! check-digit validation, so holding one is proof of validity. [`Document`]
//! is either, chosen by digit count.
//!
//! The canonical storage form is bare digits. Masked input is accepted and
//! normalized:
//!
//! - `"52998224725"` and `"529.982.247-25"` are the same [`Cpf`].
//! - `Display` and `formatted()` produce the masked form.
//! - Serialization emits the bare digits; deserialization re-validates.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::digits::DigitString;
use crate::error::DocumentError;
use crate::generate::{generate_digits_with, HEADQUARTERS_BRANCH};
use crate::kind::{classify, DocumentKind};
use crate::mask::mask_as;
use crate::validate::check_digit_string;

fn trailing_check_digits(digits: &DigitString, kind: DocumentKind) -> [u8; 2] {
    let mut values = digits.values().skip(kind.base_len());
    [values.next().unwrap_or(0), values.next().unwrap_or(0)]
}

/// Brazilian individual taxpayer number (CPF).
///
/// # Validation
///
/// - Exactly 11 digits after stripping punctuation
/// - Not a single repeated digit
/// - Digits 10 and 11 match the modulo-11 check digits of digits 1-9
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(DigitString);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Parse and validate a CPF, masked or bare.
    ///
    /// # Errors
    ///
    /// Returns the [`DocumentError`] describing the first failed check.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DocumentError> {
        check_digit_string(DocumentKind::Cpf, DigitString::from_text(value.as_ref())).map(Self)
    }

    /// A random valid CPF.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(generate_digits_with(DocumentKind::Cpf, rng))
    }

    /// Access the CPF in canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Return the CPF in masked form: `###.###.###-##`.
    pub fn formatted(&self) -> String {
        mask_as(DocumentKind::Cpf, &self.0).into_string()
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        trailing_check_digits(&self.0, DocumentKind::Cpf)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Brazilian legal-entity taxpayer number (CNPJ).
///
/// Layout of the 14 digits: 8-digit company root, 4-digit establishment
/// (branch) number, 2 check digits. Branch `0001` is the headquarters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(DigitString);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Parse and validate a CNPJ, masked or bare.
    ///
    /// # Errors
    ///
    /// Returns the [`DocumentError`] describing the first failed check.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DocumentError> {
        check_digit_string(DocumentKind::Cnpj, DigitString::from_text(value.as_ref())).map(Self)
    }

    /// A random valid headquarters CNPJ.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(generate_digits_with(DocumentKind::Cnpj, rng))
    }

    /// Access the CNPJ in canonical 14-digit form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Return the CNPJ in masked form: `##.###.###/####-##`.
    pub fn formatted(&self) -> String {
        mask_as(DocumentKind::Cnpj, &self.0).into_string()
    }

    /// The 8-digit company root shared by all establishments.
    pub fn root(&self) -> &str {
        &self.as_str()[..8]
    }

    /// The 4-digit establishment number.
    pub fn branch(&self) -> &str {
        &self.as_str()[8..12]
    }

    /// `true` for the main establishment (branch `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        trailing_check_digits(&self.0, DocumentKind::Cnpj)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A validated CPF or CNPJ, kind inferred from digit count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// 11-digit individual identifier.
    Cpf(Cpf),
    /// 14-digit legal-entity identifier.
    Cnpj(Cnpj),
}

impl_validating_deserialize!(Document);

impl Document {
    /// Classify `value` by digit count and validate it as that kind.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownLength`] if the digit count is
    /// neither 11 nor 14, otherwise the kind-specific rejection.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DocumentError> {
        let digits = DigitString::from_text(value.as_ref());
        match classify(&digits) {
            Some(DocumentKind::Cpf) => {
                check_digit_string(DocumentKind::Cpf, digits).map(|d| Self::Cpf(Cpf(d)))
            }
            Some(DocumentKind::Cnpj) => {
                check_digit_string(DocumentKind::Cnpj, digits).map(|d| Self::Cnpj(Cnpj(d)))
            }
            None => Err(DocumentError::UnknownLength(digits.len())),
        }
    }

    /// Which kind of identifier this is.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Canonical digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Masked form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        match self {
            Self::Cpf(cpf) => cpf.check_digits(),
            Self::Cnpj(cnpj) => cnpj.check_digits(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}
