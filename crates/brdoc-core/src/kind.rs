//! # Document Kind
//!
//! The two identifier kinds, distinguished purely by digit count. This is
//! the single place where 11 and 14 are mapped to CPF and CNPJ; callers use
//! [`classify`] instead of repeating the length branch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::WeightScheme;
use crate::digits::DigitString;
use crate::error::DocumentError;

/// Digit count of a CPF, check digits included.
pub const CPF_LEN: usize = 11;

/// Digit count of a CNPJ, check digits included.
pub const CNPJ_LEN: usize = 14;

/// Kind of Brazilian taxpayer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Individual taxpayer (11 digits).
    Cpf,
    /// Legal entity (14 digits).
    Cnpj,
}

impl DocumentKind {
    /// Both kinds, CPF first.
    pub fn all() -> &'static [DocumentKind] {
        &[Self::Cpf, Self::Cnpj]
    }

    /// Total digit count including the two check digits.
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    /// Digit count before the check digits (9 for CPF, 12 for CNPJ).
    pub const fn base_len(self) -> usize {
        self.digit_count() - 2
    }

    /// Weighting scheme used to compute this kind's check digits.
    pub const fn weight_scheme(self) -> WeightScheme {
        match self {
            Self::Cpf => WeightScheme::Cpf,
            Self::Cnpj => WeightScheme::Cnpj,
        }
    }

    /// Upper-case display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    /// Map an exact digit count to a kind.
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }
}

/// Infer the identifier kind from a digit string's length.
///
/// Returns `None` for any count other than 11 or 14. Only the length is
/// inspected; a classified string may still fail validation.
pub fn classify(digits: &DigitString) -> Option<DocumentKind> {
    DocumentKind::from_digit_count(digits.len())
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            _ => Err(DocumentError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::extract_digits;

    #[test]
    fn classify_by_length() {
        assert_eq!(classify(&extract_digits("529.982.247-25")), Some(DocumentKind::Cpf));
        assert_eq!(
            classify(&extract_digits("11.222.333/0001-81")),
            Some(DocumentKind::Cnpj)
        );
    }

    #[test]
    fn classify_other_lengths_unknown() {
        for len in [0, 1, 10, 12, 13, 15, 30] {
            let digits = extract_digits(&"1".repeat(len));
            assert_eq!(classify(&digits), None, "length {len}");
        }
    }

    #[test]
    fn lengths() {
        assert_eq!(DocumentKind::Cpf.digit_count(), 11);
        assert_eq!(DocumentKind::Cpf.base_len(), 9);
        assert_eq!(DocumentKind::Cnpj.digit_count(), 14);
        assert_eq!(DocumentKind::Cnpj.base_len(), 12);
    }

    #[test]
    fn weight_scheme_per_kind() {
        assert_eq!(DocumentKind::Cpf.weight_scheme(), WeightScheme::Cpf);
        assert_eq!(DocumentKind::Cnpj.weight_scheme(), WeightScheme::Cnpj);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(DocumentKind::Cpf.to_string(), "CPF");
        assert_eq!(DocumentKind::Cnpj.to_string(), "CNPJ");
        assert_eq!("cpf".parse::<DocumentKind>().unwrap(), DocumentKind::Cpf);
        assert_eq!(" CNPJ ".parse::<DocumentKind>().unwrap(), DocumentKind::Cnpj);
        assert!(matches!(
            "rg".parse::<DocumentKind>(),
            Err(DocumentError::UnknownKind(_))
        ));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&DocumentKind::Cnpj).unwrap(), "\"cnpj\"");
        let kind: DocumentKind = serde_json::from_str("\"cpf\"").unwrap();
        assert_eq!(kind, DocumentKind::Cpf);
    }

    #[test]
    fn all_lists_both_kinds() {
        assert_eq!(DocumentKind::all(), &[DocumentKind::Cpf, DocumentKind::Cnpj]);
    }
}
