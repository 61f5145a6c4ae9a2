//! # Validation
//!
//! Check-digit validation for CPF and CNPJ.
//!
//! Steps, identical for both kinds:
//!
//! 1. Extract digits from the raw text.
//! 2. Reject if the count is not exactly 11 (CPF) / 14 (CNPJ).
//! 3. Reject if every digit is the same. `000.000.000-00` and friends pass
//!    the checksum but are never issued.
//! 4. Recompute both check digits over the first 9 / 12 digits with
//!    [`check_digits`] and require the trailing two digits to match, in order.
//!
//! The `is_valid_*` functions are total and answer `bool`; the `check_*`
//! functions run the same steps and report which one rejected the input.

use crate::checksum::check_digits;
use crate::digits::DigitString;
use crate::error::DocumentError;
use crate::kind::DocumentKind;

/// Validate `digits` as an identifier of `kind`.
///
/// Returns the digits unchanged on success.
///
/// # Errors
///
/// - [`DocumentError::WrongLength`] if the count differs from `kind`'s.
/// - [`DocumentError::RepeatedDigits`] for single-digit sequences.
/// - [`DocumentError::CheckDigitMismatch`] if the trailing digits are wrong.
pub fn check_digit_string(
    kind: DocumentKind,
    digits: DigitString,
) -> Result<DigitString, DocumentError> {
    if digits.len() != kind.digit_count() {
        return Err(DocumentError::WrongLength {
            kind,
            expected: kind.digit_count(),
            actual: digits.len(),
        });
    }

    if digits.is_repeated() {
        return Err(DocumentError::RepeatedDigits { kind });
    }

    let base = digits.prefix(kind.base_len());
    let expected = check_digits(&base, kind.weight_scheme());
    let supplied = digits.suffix_after(kind.base_len());

    if !supplied.bytes().map(|b| b - b'0').eq(expected) {
        return Err(DocumentError::CheckDigitMismatch {
            kind,
            expected: format!("{}{}", expected[0], expected[1]),
            actual: supplied.to_string(),
        });
    }

    Ok(digits)
}

/// Extract the digits of `text` and validate them as `kind`.
pub fn check(kind: DocumentKind, text: &str) -> Result<DigitString, DocumentError> {
    check_digit_string(kind, DigitString::from_text(text))
}

/// Validate `text` as a CPF, reporting the rejection reason.
pub fn check_cpf(text: &str) -> Result<DigitString, DocumentError> {
    check(DocumentKind::Cpf, text)
}

/// Validate `text` as a CNPJ, reporting the rejection reason.
pub fn check_cnpj(text: &str) -> Result<DigitString, DocumentError> {
    check(DocumentKind::Cnpj, text)
}

/// `true` if `text` is a valid identifier of `kind`. Never fails.
pub fn is_valid(kind: DocumentKind, text: &str) -> bool {
    check(kind, text).is_ok()
}

/// `true` if `text` holds a valid CPF. Punctuation is ignored.
pub fn is_valid_cpf(text: &str) -> bool {
    is_valid(DocumentKind::Cpf, text)
}

/// `true` if `text` holds a valid CNPJ. Punctuation is ignored.
pub fn is_valid_cnpj(text: &str) -> bool {
    is_valid(DocumentKind::Cnpj, text)
}
