//! # Progressive Masking
//!
//! Applies the canonical punctuation over whatever digits are present, so it
//! can run after every keystroke:
//!
//! | Digits | Pattern              | Example              |
//! |--------|----------------------|----------------------|
//! | 0-11   | `###.###.###-##`     | `529.982.2`          |
//! | 12+    | `##.###.###/####-##` | `11.222.333/0001-81` |
//!
//! A separator is only written when at least one digit follows it. Digits
//! past the end of the pattern are kept and land in the final group; the
//! masker never drops, reorders, or substitutes digits.

use std::fmt;

use serde::Serialize;

use crate::digits::DigitString;
use crate::kind::{DocumentKind, CPF_LEN};

/// Group sizes and the separator written after each group.
struct MaskPattern {
    groups: &'static [(usize, char)],
}

static CPF_PATTERN: MaskPattern = MaskPattern {
    groups: &[(3, '.'), (3, '.'), (3, '-')],
};

static CNPJ_PATTERN: MaskPattern = MaskPattern {
    groups: &[(2, '.'), (3, '.'), (3, '/'), (4, '-')],
};

impl MaskPattern {
    fn for_kind(kind: DocumentKind) -> &'static MaskPattern {
        match kind {
            DocumentKind::Cpf => &CPF_PATTERN,
            DocumentKind::Cnpj => &CNPJ_PATTERN,
        }
    }

    fn apply(&self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + self.groups.len());
        let mut rest = digits;
        for &(size, separator) in self.groups {
            if rest.len() <= size {
                out.push_str(rest);
                return out;
            }
            let (group, tail) = rest.split_at(size);
            out.push_str(group);
            out.push(separator);
            rest = tail;
        }
        out.push_str(rest);
        out
    }
}

/// Display form of an identifier: its digits interspersed with separators.
///
/// Derived data. The authoritative value is always [`MaskedDocument::digits`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MaskedDocument(String);

impl MaskedDocument {
    /// Access the masked text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the mask, returning the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The digits without punctuation.
    pub fn digits(&self) -> DigitString {
        DigitString::from_text(&self.0)
    }
}

impl fmt::Display for MaskedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MaskedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<MaskedDocument> for String {
    fn from(masked: MaskedDocument) -> Self {
        masked.0
    }
}

/// Extract the digits of `text` and mask them.
///
/// Up to 11 digits get the CPF pattern, more get the CNPJ pattern. Never
/// fails: empty or digitless input yields an empty mask.
pub fn mask_document(text: &str) -> MaskedDocument {
    mask_digits(&DigitString::from_text(text))
}

/// Mask an already-extracted digit string, choosing the pattern by length.
pub fn mask_digits(digits: &DigitString) -> MaskedDocument {
    let kind = if digits.len() <= CPF_LEN {
        DocumentKind::Cpf
    } else {
        DocumentKind::Cnpj
    };
    mask_as(kind, digits)
}

/// Mask `digits` with the pattern of `kind`, regardless of length.
pub fn mask_as(kind: DocumentKind, digits: &DigitString) -> MaskedDocument {
    MaskedDocument(MaskPattern::for_kind(kind).apply(digits.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cpf() {
        assert_eq!(mask_document("52998224725").as_str(), "529.982.247-25");
    }

    #[test]
    fn full_cnpj() {
        assert_eq!(mask_document("11222333000181").as_str(), "11.222.333/0001-81");
    }

    #[test]
    fn partial_cpf_while_typing() {
        let cases = [
            ("", ""),
            ("5", "5"),
            ("529", "529"),
            ("5299", "529.9"),
            ("529982", "529.982"),
            ("5299822", "529.982.2"),
            ("529982247", "529.982.247"),
            ("5299822472", "529.982.247-2"),
        ];
        for (input, expected) in cases {
            assert_eq!(mask_document(input).as_str(), expected, "input {input:?}");
        }
    }

    #[test]
    fn partial_cnpj_while_typing() {
        assert_eq!(mask_document("112223330001").as_str(), "11.222.333/0001");
        assert_eq!(mask_document("1122233300018").as_str(), "11.222.333/0001-8");
    }

    #[test]
    fn remasking_masked_input_is_stable() {
        let once = mask_document("529.982.247-25");
        assert_eq!(mask_document(once.as_str()), once);
        let once = mask_document("11.222.333/0001-81");
        assert_eq!(mask_document(once.as_str()), once);
    }

    #[test]
    fn noise_is_discarded() {
        assert_eq!(mask_document(" 529 982 247 25 ").as_str(), "529.982.247-25");
        assert_eq!(mask_document("abc").as_str(), "");
    }

    #[test]
    fn overflow_digits_pass_through_into_last_group() {
        assert_eq!(
            mask_document("112223330001810").as_str(),
            "11.222.333/0001-810"
        );
        assert_eq!(
            mask_document("11222333000181999").digits().as_str(),
            "11222333000181999"
        );
    }

    #[test]
    fn forced_pattern() {
        let digits = DigitString::from_text("52998224725");
        assert_eq!(mask_as(DocumentKind::Cnpj, &digits).as_str(), "52.998.224/725");
    }

    #[test]
    fn serializes_as_plain_string() {
        let masked = mask_document("52998224725");
        assert_eq!(serde_json::to_string(&masked).unwrap(), "\"529.982.247-25\"");
    }
}
