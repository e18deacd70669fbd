//! Property-based tests for the cadastro crate.

use cadastro::{DocumentKind, classify_and_validate, cnpj, cpf};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────────

/// A 9-digit CPF body.
fn arb_cpf_body() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 9)
        .prop_map(|digits| digits.iter().map(|&d| char::from(b'0' + d)).collect())
}

/// A 12-character alphanumeric CNPJ base.
fn arb_cnpj_base() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9A-Z]{12}").unwrap()
}

/// Formatting noise: separators and whitespace mixed into a value.
fn with_noise(value: &str) -> String {
    let mut noisy = String::new();
    for (i, c) in value.chars().enumerate() {
        noisy.push(c);
        if i % 3 == 2 {
            noisy.push('.');
        }
    }
    noisy
}

// ── CPF properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_cpf_always_validates(seed in any::<u64>()) {
        use rand::{SeedableRng, rngs::StdRng};

        let generated = cpf::generate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert!(cpf::validate(&generated));

        let formatted = cpf::format(&generated).unwrap();
        prop_assert!(cpf::validate(&formatted));
    }

    #[test]
    fn cpf_format_is_idempotent_through_cleaning(body in arb_cpf_body()) {
        // all-zero body plus "00" is the rejected all-same sequence
        prop_assume!(body != "000000000");

        // append whatever check digits make the length right; format
        // ignores their correctness
        let raw = format!("{body}00");
        let formatted = cpf::format(&raw).unwrap();

        let stripped: String = formatted.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(cpf::format(&stripped).unwrap(), formatted);
    }

    #[test]
    fn cpf_validation_ignores_separators(body in arb_cpf_body()) {
        let raw = format!("{body}11");
        prop_assert_eq!(cpf::validate(&raw), cpf::validate(&with_noise(&raw)));
    }

    #[test]
    fn cpf_formatted_shape(body in arb_cpf_body()) {
        prop_assume!(body != "000000000");

        let formatted = cpf::format(&format!("{body}00")).unwrap();
        prop_assert_eq!(formatted.len(), 14);
        prop_assert_eq!(formatted.as_bytes()[3], b'.');
        prop_assert_eq!(formatted.as_bytes()[7], b'.');
        prop_assert_eq!(formatted.as_bytes()[11], b'-');
    }
}

// ── CNPJ properties ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_cnpj_always_validates(seed in any::<u64>()) {
        use rand::{SeedableRng, rngs::StdRng};

        let generated = cnpj::generate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert!(cnpj::validate(&generated));

        let formatted = cnpj::format(&generated).unwrap();
        prop_assert!(cnpj::validate(&formatted));
    }

    #[test]
    fn generated_legacy_cnpj_always_validates(seed in any::<u64>()) {
        use rand::{SeedableRng, rngs::StdRng};

        let generated = cnpj::generate_legacy_with(&mut StdRng::seed_from_u64(seed));
        prop_assert!(generated.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(cnpj::validate(&generated));
    }

    #[test]
    fn cnpj_validation_is_case_insensitive(base in arb_cnpj_base()) {
        let raw = format!("{base}00");
        prop_assert_eq!(cnpj::validate(&raw), cnpj::validate(&raw.to_lowercase()));
    }

    #[test]
    fn cnpj_format_is_idempotent_through_cleaning(base in arb_cnpj_base()) {
        let formatted = cnpj::format(&format!("{base}00")).unwrap();

        let stripped: String = formatted
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        prop_assert_eq!(cnpj::format(&stripped).unwrap(), formatted);
    }

    #[test]
    fn cnpj_formatted_shape(base in arb_cnpj_base()) {
        let formatted = cnpj::format(&format!("{base}00")).unwrap();
        prop_assert_eq!(formatted.len(), 18);
        prop_assert_eq!(formatted.as_bytes()[2], b'.');
        prop_assert_eq!(formatted.as_bytes()[6], b'.');
        prop_assert_eq!(formatted.as_bytes()[10], b'/');
        prop_assert_eq!(formatted.as_bytes()[15], b'-');
    }
}

// ── Classifier properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn classifier_never_panics(input in ".*") {
        let _ = classify_and_validate(&input);
    }

    #[test]
    fn classifier_agrees_with_validators(body in arb_cpf_body(), base in arb_cnpj_base()) {
        let cpf_raw = format!("{body}07");
        let (kind, valid) = classify_and_validate(&cpf_raw);
        prop_assert_eq!(kind, DocumentKind::Cpf);
        prop_assert_eq!(valid, cpf::validate(&cpf_raw));

        let cnpj_raw = format!("{base}07");
        let (kind, valid) = classify_and_validate(&cnpj_raw);
        prop_assert_eq!(kind, DocumentKind::Cnpj);
        prop_assert_eq!(valid, cnpj::validate(&cnpj_raw));
    }
}
