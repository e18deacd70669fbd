//! CNPJ cleaning, check-digit verification, and formatting.

use super::check_digit::calculate_dv;
use crate::error::DocumentError;

/// Number of characters in a CNPJ (12-character base + 2 check digits).
pub const CNPJ_LENGTH: usize = 14;

/// Length of the base, before the check digits.
pub(crate) const BASE_LENGTH: usize = 12;

/// Uppercase the input, then keep only digits and `A`–`Z`.
///
/// Strips formatting (`.`, `/`, `-`), whitespace, and anything else
/// outside the alphabet. Never truncates; idempotent.
pub(crate) fn clean(value: &str) -> String {
    value
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        .collect()
}

/// Validate an alphanumeric CNPJ, with or without formatting.
///
/// True iff the cleaned input has exactly 14 characters, the final two
/// are decimal digits, and both check digits match the recomputation over
/// the 12-character base. Never errors.
pub fn validate(value: &str) -> bool {
    let cleaned = clean(value);

    if cleaned.len() != CNPJ_LENGTH {
        return false;
    }

    let (base, check) = cleaned.split_at(BASE_LENGTH);

    // The check digits are always numeric, even in the alphanumeric space.
    let mut check_chars = check.chars();
    let (Some(dv1), Some(dv2)) = (
        check_chars.next().and_then(|c| c.to_digit(10)),
        check_chars.next().and_then(|c| c.to_digit(10)),
    ) else {
        return false;
    };

    let Ok(dv1_calc) = calculate_dv(base) else {
        return false;
    };
    let Ok(dv2_calc) = calculate_dv(&format!("{base}{dv1_calc}")) else {
        return false;
    };

    u32::from(dv1_calc) == dv1 && u32::from(dv2_calc) == dv2
}

/// Format a CNPJ to the standard `XX.XXX.XXX/XXXX-XX` form.
///
/// Errors when the cleaned input does not have exactly 14 characters.
/// Check digits are not re-verified here.
pub fn format(value: &str) -> Result<String, DocumentError> {
    let cleaned = clean(value);

    if cleaned.len() != CNPJ_LENGTH {
        return Err(DocumentError::Length {
            document: "CNPJ",
            expected: CNPJ_LENGTH,
            actual: cleaned.len(),
        });
    }

    Ok(format!(
        "{}.{}.{}/{}-{}",
        &cleaned[0..2],
        &cleaned[2..5],
        &cleaned[5..8],
        &cleaned[8..12],
        &cleaned[12..14],
    ))
}
