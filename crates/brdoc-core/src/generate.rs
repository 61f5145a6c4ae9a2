//! # Test-Value Generation
//!
//! Random, checksum-valid identifiers for test fixtures and demos.
//!
//! - CPF: 9 random digits, then two check digits.
//! - CNPJ: 8 random root digits, the headquarters branch `0001`, then two
//!   check digits.
//!
//! Check digits come from [`check_digits`], the same routine the validators
//! use. A draw whose base is a single repeated digit is discarded, because
//! such a base completes to a repeated-digit identifier the validator
//! rejects.
//!
//! Randomness is `rand::thread_rng()`: not cryptographic, and not meant to
//! be. These values are never issued registrations.

use rand::Rng;

use crate::checksum::check_digits;
use crate::digits::DigitString;
use crate::kind::DocumentKind;
use crate::mask::{mask_as, MaskedDocument};

/// Establishment number of a company's main office.
pub const HEADQUARTERS_BRANCH: &str = "0001";

/// Random root digits in a generated CNPJ.
const CNPJ_ROOT_LEN: usize = 8;

fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> DigitString {
    let mut digits = DigitString::default();
    for _ in 0..len {
        digits.push_digit(rng.gen_range(0..10));
    }
    digits
}

fn random_base<R: Rng + ?Sized>(rng: &mut R, kind: DocumentKind) -> DigitString {
    loop {
        let base = match kind {
            DocumentKind::Cpf => random_digits(rng, kind.base_len()),
            DocumentKind::Cnpj => {
                let mut base = random_digits(rng, CNPJ_ROOT_LEN);
                base.push_digits(HEADQUARTERS_BRANCH);
                base
            }
        };
        if !base.is_repeated() {
            return base;
        }
    }
}

/// Draw a complete, valid identifier of `kind` as bare digits.
pub fn generate_digits_with<R: Rng + ?Sized>(kind: DocumentKind, rng: &mut R) -> DigitString {
    let mut digits = random_base(rng, kind);
    let [first, second] = check_digits(&digits, kind.weight_scheme());
    digits.push_digit(first);
    digits.push_digit(second);
    digits
}

/// Draw a valid identifier of `kind` from `rng` and mask it.
pub fn generate_with<R: Rng + ?Sized>(kind: DocumentKind, rng: &mut R) -> MaskedDocument {
    mask_as(kind, &generate_digits_with(kind, rng))
}

/// Draw a valid identifier of `kind` from the thread-local RNG and mask it.
pub fn generate(kind: DocumentKind) -> MaskedDocument {
    generate_with(kind, &mut rand::thread_rng())
}

/// A random valid CPF, masked (`###.###.###-##`).
pub fn generate_cpf() -> MaskedDocument {
    generate(DocumentKind::Cpf)
}

/// A random valid headquarters CNPJ, masked (`##.###.###/0001-##`).
pub fn generate_cnpj() -> MaskedDocument {
    generate(DocumentKind::Cnpj)
}

/// [`generate_cpf`] with a caller-supplied RNG.
pub fn generate_cpf_with<R: Rng + ?Sized>(rng: &mut R) -> MaskedDocument {
    generate_with(DocumentKind::Cpf, rng)
}

/// [`generate_cnpj`] with a caller-supplied RNG.
pub fn generate_cnpj_with<R: Rng + ?Sized>(rng: &mut R) -> MaskedDocument {
    generate_with(DocumentKind::Cnpj, rng)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::validate::{is_valid_cnpj, is_valid_cpf};

    #[test]
    fn generated_cpf_is_masked_and_valid() {
        let cpf = generate_cpf();
        assert_eq!(cpf.as_str().len(), 14);
        assert_eq!(&cpf.as_str()[3..4], ".");
        assert_eq!(&cpf.as_str()[11..12], "-");
        assert!(is_valid_cpf(cpf.as_str()), "{cpf}");
    }

    #[test]
    fn generated_cnpj_is_headquarters_and_valid() {
        let cnpj = generate_cnpj();
        assert_eq!(cnpj.as_str().len(), 18);
        assert_eq!(&cnpj.as_str()[10..16], "/0001-");
        assert!(is_valid_cnpj(cnpj.as_str()), "{cnpj}");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_cpf_with(&mut StdRng::seed_from_u64(7));
        let b = generate_cpf_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        let a = generate_cnpj_with(&mut StdRng::seed_from_u64(7));
        let b = generate_cnpj_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn many_seeded_draws_validate() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2_000 {
            let cpf = generate_cpf_with(&mut rng);
            assert!(is_valid_cpf(cpf.as_str()), "{cpf}");
            let cnpj = generate_cnpj_with(&mut rng);
            assert!(is_valid_cnpj(cnpj.as_str()), "{cnpj}");
        }
    }

    #[test]
    fn digits_have_kind_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in DocumentKind::all() {
            let digits = generate_digits_with(*kind, &mut rng);
            assert_eq!(digits.len(), kind.digit_count());
        }
    }

    #[test]
    fn repeated_bases_are_redrawn() {
        // A constant RNG produces a repeated base.
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let first = random_digits(&mut rng, 9);
        assert!(first.is_repeated());

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            assert!(!random_base(&mut rng, DocumentKind::Cpf).is_repeated());
        }
    }
}
