//! # Known Test Vectors
//!
//! Published example identifiers and hand-checked masks, exercised through
//! the public API only.

use brdoc_core::{
    check_cnpj, check_cpf, classify, extract_digits, generate_cnpj, generate_cpf,
    is_valid_cnpj, is_valid_cpf, mask_document, Cnpj, Cpf, Document, DocumentError,
    DocumentKind,
};

#[test]
fn valid_cpfs() {
    for cpf in ["529.982.247-25", "111.444.777-35", "123.456.789-09", "52998224725"] {
        assert!(is_valid_cpf(cpf), "{cpf} should be valid");
    }
}

#[test]
fn invalid_cpfs() {
    for cpf in ["123.456.789-00", "529.982.247-24", "111.444.777-53", "123", ""] {
        assert!(!is_valid_cpf(cpf), "{cpf} should be invalid");
    }
}

#[test]
fn valid_cnpjs() {
    for cnpj in ["11.222.333/0001-81", "11222333000181", "11.222.333/0002-62"] {
        assert!(is_valid_cnpj(cnpj), "{cnpj} should be valid");
    }
}

#[test]
fn invalid_cnpjs() {
    for cnpj in ["11.222.333/0001-18", "11.222.333/0001-80", "", "1122233300018"] {
        assert!(!is_valid_cnpj(cnpj), "{cnpj} should be invalid");
    }
}

#[test]
fn repeated_digit_sequences_rejected() {
    assert!(!is_valid_cpf("11111111111"));
    assert!(!is_valid_cnpj("11111111111111"));
    assert!(matches!(
        check_cpf("000.000.000-00"),
        Err(DocumentError::RepeatedDigits { .. })
    ));
    assert!(matches!(
        check_cnpj("99.999.999/9999-99"),
        Err(DocumentError::RepeatedDigits { .. })
    ));
}

#[test]
fn masks() {
    assert_eq!(mask_document("52998224725").as_str(), "529.982.247-25");
    assert_eq!(mask_document("11222333000181").as_str(), "11.222.333/0001-81");
}

#[test]
fn classification() {
    assert_eq!(classify(&extract_digits("529.982.247-25")), Some(DocumentKind::Cpf));
    assert_eq!(
        classify(&extract_digits("11.222.333/0001-81")),
        Some(DocumentKind::Cnpj)
    );
    assert_eq!(classify(&extract_digits("1234567890")), None);
}

#[test]
fn generators_produce_valid_masked_values() {
    for _ in 0..200 {
        let cpf = generate_cpf();
        assert!(is_valid_cpf(cpf.as_str()), "{cpf}");
        assert_eq!(mask_document(cpf.as_str()), cpf);

        let cnpj = generate_cnpj();
        assert!(is_valid_cnpj(cnpj.as_str()), "{cnpj}");
        assert!(Cnpj::new(cnpj.as_str()).unwrap().is_headquarters());
    }
}

#[test]
fn typed_and_boolean_validators_agree() {
    let inputs = [
        "529.982.247-25",
        "123.456.789-00",
        "11.222.333/0001-81",
        "11.222.333/0001-80",
        "12",
    ];
    for input in inputs {
        assert_eq!(Cpf::new(input).is_ok(), is_valid_cpf(input), "{input}");
        assert_eq!(Cnpj::new(input).is_ok(), is_valid_cnpj(input), "{input}");
        assert_eq!(
            Document::new(input).is_ok(),
            is_valid_cpf(input) || is_valid_cnpj(input),
            "{input}"
        );
    }
}
