//! Issuing-region lookup for the 9th CPF digit.
//!
//! The digit at position 8 encodes the fiscal region where the CPF was
//! issued. This is classification metadata only — it carries no weight in
//! validation and is resolved even for check-digit-invalid input.

use super::validate::clean;

/// Region labels indexed by the 9th digit (0–9).
static REGIONS: &[&str; 10] = &[
    "Rio Grande do Sul",
    "Federal District, Goiás, Mato Grosso do Sul, and Tocantins",
    "Pará, Amazonas, Acre, Amapá, Rondônia, and Roraima",
    "Ceará, Maranhão, and Piauí",
    "Pernambuco, Rio Grande do Norte, Paraíba, and Alagoas",
    "Bahia and Sergipe",
    "Minas Gerais",
    "Rio de Janeiro and Espírito Santo",
    "São Paulo",
    "Paraná and Santa Catarina",
];

/// Return the issuing region encoded in the 9th digit of a CPF.
///
/// `None` when the cleaned input has fewer than 9 digits. Check-digit
/// validity is irrelevant here.
pub fn check_origin(value: &str) -> Option<&'static str> {
    let digits = clean(value);
    digits.get(8).map(|&d| REGIONS[usize::from(d)])
}
