//! # Checksum Engine
//!
//! Weighted modulo-11 check digits shared by validation and generation.
//!
//! For a base of digits `d_0 .. d_{n-1}` with weights `w_0 .. w_{n-1}`:
//!
//! ```text
//! r = (Σ d_i · w_i) mod 11
//! check = 0       if r < 2
//!         11 - r  otherwise
//! ```
//!
//! ## Weighting schemes
//!
//! | Scheme | Weight of digit `i` in a base of length `n` |
//! |--------|---------------------------------------------|
//! | CPF    | `n + 1 - i` (10..2 for the first digit, 11..2 for the second) |
//! | CNPJ   | [`CNPJ_WEIGHTS`] aligned so its last entry meets the last digit |
//!
//! The second check digit is computed over the base with the first check
//! digit appended; see [`check_digits`].

use crate::digits::DigitString;

/// CNPJ weights, read right-aligned against the base.
///
/// A 12-digit base uses the last 12 entries; a 13-digit base (base plus
/// first check digit) uses all 13. Read from the right this is the cycle
/// 2, 3, ..., 9, 2, ...; bases longer than the table continue that cycle.
pub const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Positional weighting used by [`compute_check_digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightScheme {
    /// Descending weights from `len + 1` down to 2.
    Cpf,
    /// Right-aligned [`CNPJ_WEIGHTS`].
    Cnpj,
}

impl WeightScheme {
    /// Weight of the digit at `position` (0-indexed from the left) in a base
    /// of `len` digits. `position` must be below `len`.
    pub fn weight(self, len: usize, position: usize) -> u32 {
        debug_assert!(position < len);
        match self {
            Self::Cpf => (len + 1 - position) as u32,
            Self::Cnpj => {
                let from_right = len - 1 - position;
                match CNPJ_WEIGHTS.len().checked_sub(from_right + 1) {
                    Some(index) => CNPJ_WEIGHTS[index],
                    None => 2 + (from_right % 8) as u32,
                }
            }
        }
    }
}

/// Compute one check digit (0-9) over `base` with the given weights.
///
/// The sum is reduced modulo 11 as it accumulates, so arbitrarily long
/// bases cannot overflow.
pub fn compute_check_digit(base: &DigitString, scheme: WeightScheme) -> u8 {
    let len = base.len();
    let remainder = base
        .values()
        .enumerate()
        .fold(0u64, |acc, (i, digit)| {
            let weight = u64::from(scheme.weight(len, i)) % 11;
            (acc + u64::from(digit) * weight) % 11
        });
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Compute both check digits for `base`.
///
/// The first digit is computed over `base`; the second over `base` followed
/// by the first. This is the only check-digit routine in the crate: the
/// validators compare against it and the generators append its output.
pub fn check_digits(base: &DigitString, scheme: WeightScheme) -> [u8; 2] {
    let first = compute_check_digit(base, scheme);
    let mut extended = base.clone();
    extended.push_digit(first);
    let second = compute_check_digit(&extended, scheme);
    [first, second]
}
