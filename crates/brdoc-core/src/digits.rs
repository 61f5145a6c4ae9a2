//! # Digit Strings
//!
//! [`DigitString`] is the normalized form every other operation works on:
//! ASCII decimal digits only, in input order, any length. The inner field is
//! private, so the invariant holds for every value in the program.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DocumentError;

/// A sequence of ASCII decimal digits (`0`-`9`).
///
/// Built either leniently with [`DigitString::from_text`], which drops every
/// non-digit character, or strictly with [`DigitString::new`], which rejects
/// input containing anything but digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DigitString(String);

impl_validating_deserialize!(DigitString);

impl DigitString {
    /// Create a digit string, rejecting any non-digit character.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NonDigit`] if `value` contains a character
    /// outside `0`-`9`. The empty string is accepted.
    pub fn new(value: impl Into<String>) -> Result<Self, DocumentError> {
        let s = value.into();
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DocumentError::NonDigit(s));
        }
        Ok(Self(s))
    }

    /// Keep only the ASCII decimal digits of `text`, in their original order.
    ///
    /// Total: letters, punctuation, whitespace, and non-ASCII digits
    /// (e.g. Arabic-Indic numerals) are all dropped.
    pub fn from_text(text: &str) -> Self {
        Self(text.chars().filter(char::is_ascii_digit).collect())
    }

    /// Access the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the digit string, returning the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric values of the digits, left to right.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// `true` if the string is non-empty and every digit is the same.
    pub fn is_repeated(&self) -> bool {
        let mut bytes = self.0.bytes();
        match bytes.next() {
            Some(first) => bytes.all(|b| b == first),
            None => false,
        }
    }

    /// The first `n` digits (all of them if `n` exceeds the length).
    pub fn prefix(&self, n: usize) -> DigitString {
        Self(self.0[..n.min(self.0.len())].to_string())
    }

    /// The digits after the first `n` (empty if `n` exceeds the length).
    pub fn suffix_after(&self, n: usize) -> &str {
        &self.0[n.min(self.0.len())..]
    }

    /// Append one digit. Values above 9 are a caller bug.
    pub(crate) fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit < 10, "digit out of range: {digit}");
        self.0.push(char::from(b'0' + digit % 10));
    }

    /// Append a literal run of digits.
    pub(crate) fn push_digits(&mut self, digits: &str) {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        self.0.push_str(digits);
    }
}

/// Strip every non-digit character from `text`.
///
/// Free-function form of [`DigitString::from_text`].
pub fn extract_digits(text: &str) -> DigitString {
    DigitString::from_text(text)
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DigitString {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<DigitString> for String {
    fn from(digits: DigitString) -> Self {
        digits.0
    }
}
