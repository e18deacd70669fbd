//! Random CNPJ generation, alphanumeric and legacy numeric.

use rand::Rng;

use super::check_digit::calculate_dv;
use super::validate::BASE_LENGTH;

/// Generate a random valid alphanumeric CNPJ, unformatted (14 characters).
///
/// Each base position is a digit or an uppercase letter with equal
/// probability. Draws from the thread-local generator; safe for
/// concurrent callers.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a random valid alphanumeric CNPJ from a caller-supplied
/// generator.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base: String = (0..BASE_LENGTH)
        .map(|_| {
            if rng.gen_bool(0.5) {
                char::from(b'0' + rng.gen_range(0..10))
            } else {
                char::from(b'A' + rng.gen_range(0..26))
            }
        })
        .collect();

    append_check_digits(base)
}

/// Generate a random valid legacy CNPJ (digits-only base, 14 characters).
///
/// The check-digit arithmetic is identical to the alphanumeric variant;
/// only the base alphabet is restricted.
pub fn generate_legacy() -> String {
    generate_legacy_with(&mut rand::thread_rng())
}

/// Generate a random valid legacy CNPJ from a caller-supplied generator.
pub fn generate_legacy_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base: String = (0..BASE_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect();

    append_check_digits(base)
}

fn append_check_digits(mut base: String) -> String {
    // The base comes from the fixed 0-9/A-Z alphabet, so calculate_dv
    // cannot hit an out-of-alphabet character here.
    let dv1 = calculate_dv(&base).expect("generated base is alphanumeric");
    base.push(char::from(b'0' + dv1));
    let dv2 = calculate_dv(&base).expect("generated base is alphanumeric");
    base.push(char::from(b'0' + dv2));
    base
}
