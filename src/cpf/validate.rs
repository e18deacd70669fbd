//! CPF cleaning, check-digit verification, and formatting.

use crate::error::DocumentError;

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Strip every non-digit character, keeping all remaining digits.
///
/// Never truncates: an input with 13 digits cleans to 13 digits and is
/// rejected by the length checks downstream. Idempotent.
pub(crate) fn clean(value: &str) -> Vec<u8> {
    value
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// The ten all-same-digit sequences ("00000000000" through "99999999999")
/// satisfy the check-digit arithmetic but are not issued.
fn is_rejected_sequence(digits: &[u8]) -> bool {
    digits.len() == CPF_LENGTH && digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// First check digit: weight digit i by `10 - i` over the 9 body digits,
/// multiply the sum by 10, reduce mod 11, clamp a remainder of 10 to 0.
pub(crate) fn first_check_digit(digits: &[u8]) -> u8 {
    weighted_check_digit(&digits[..9], 10)
}

/// Second check digit: same pass over the first 10 digits (body plus the
/// first check digit), with weights starting at 11.
pub(crate) fn second_check_digit(digits: &[u8]) -> u8 {
    weighted_check_digit(&digits[..10], 11)
}

fn weighted_check_digit(digits: &[u8], first_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (first_weight - i as u32))
        .sum();

    let rest = (sum * 10) % 11;
    if rest >= 10 { 0 } else { rest as u8 }
}

/// Validate a CPF, with or without formatting.
///
/// True iff the cleaned input is not an all-same-digit sequence, has
/// exactly 11 digits, and both check digits match the recomputation.
/// Never errors: malformed input is simply invalid.
pub fn validate(value: &str) -> bool {
    let digits = clean(value);

    !is_rejected_sequence(&digits)
        && digits.len() == CPF_LENGTH
        && first_check_digit(&digits) == digits[9]
        && second_check_digit(&digits) == digits[10]
}

/// Format a CPF to the standard `XXX.XXX.XXX-XX` form.
///
/// Errors when the cleaned input is an all-same-digit sequence or does not
/// have exactly 11 digits. Check digits are not re-verified here; a
/// well-formed but invalid CPF still formats.
pub fn format(value: &str) -> Result<String, DocumentError> {
    let digits = clean(value);

    if is_rejected_sequence(&digits) {
        return Err(DocumentError::RepeatedDigits);
    }

    if digits.len() != CPF_LENGTH {
        return Err(DocumentError::Length {
            document: "CPF",
            expected: CPF_LENGTH,
            actual: digits.len(),
        });
    }

    let cpf = digits_to_string(&digits);
    Ok(format!(
        "{}.{}.{}-{}",
        &cpf[..3],
        &cpf[3..6],
        &cpf[6..9],
        &cpf[9..]
    ))
}

pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
