//! Random CPF generation.

use rand::Rng;

use super::validate::{digits_to_string, first_check_digit, second_check_digit};

/// Generate a random valid CPF, unformatted (11 digits).
///
/// Draws from the thread-local generator; safe to call from any number of
/// threads concurrently. An all-same-digit body would be rejected by
/// [`validate`](super::validate) but occurs with probability 10⁻⁸ per draw
/// and is not re-rolled.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a random valid CPF from a caller-supplied generator.
///
/// Useful for seeded, reproducible output.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits: Vec<u8> = (0..9).map(|_| rng.gen_range(0..10u8)).collect();
    digits.push(first_check_digit(&digits));
    digits.push(second_check_digit(&digits));

    digits_to_string(&digits)
}
