//! Weighted modulo-11 check digit for alphanumeric CNPJs (SERPRO
//! algorithm).

use crate::error::DocumentError;

/// Weights cycle right-to-left, restarting at 2 after the 8th element.
const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Character values: digits map to 0–9, `A`–`Z` to 17–42. Both are the
/// character's ASCII code minus 48.
fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' | 'A'..='Z' => Some(c as u32 - 48),
        _ => None,
    }
}

/// Compute one check digit over an alphanumeric base.
///
/// Walks the input right to left, weighting each character value by the
/// cycling sequence 2..=9, then reduces the sum mod 11: a remainder of 0
/// or 1 yields 0, anything else `11 - remainder`.
///
/// Any character outside `0-9` / `A-Z` is an error; nothing is silently
/// substituted.
pub(crate) fn calculate_dv(value: &str) -> Result<u8, DocumentError> {
    let length = value.chars().count();
    let mut sum = 0u32;

    for (j, character) in value.chars().rev().enumerate() {
        let val = char_value(character).ok_or(DocumentError::Character {
            character,
            position: length - 1 - j,
        })?;
        sum += val * WEIGHTS[j % WEIGHTS.len()];
    }

    let remainder = sum % 11;
    Ok(if remainder <= 1 {
        0
    } else {
        (11 - remainder) as u8
    })
}
