//! CNPJ — the 14-character Brazilian legal-entity taxpayer ID.
//!
//! Since the SERPRO alphanumeric specification, the 12-character base may
//! mix digits and uppercase letters; the two trailing check digits are
//! always numeric and come from a weighted modulo-11 pass with letters
//! valued at their ASCII code minus 48. The older all-numeric CNPJ is a
//! subset of the same space and uses the identical arithmetic.
//!
//! # Example
//!
//! ```rust
//! use cadastro::cnpj;
//!
//! // SERPRO specification example
//! assert!(cnpj::validate("12ABC34501DE35"));
//! assert_eq!(cnpj::format("12ABC34501DE35").unwrap(), "12.ABC.345/01DE-35");
//!
//! // legacy numeric CNPJ
//! assert!(cnpj::validate("11.222.333/0001-81"));
//!
//! let generated = cnpj::generate();
//! assert!(cnpj::validate(&generated));
//! ```

mod check_digit;
mod generate;
mod validate;

pub use generate::{generate, generate_legacy, generate_legacy_with, generate_with};
pub use validate::{CNPJ_LENGTH, format, validate};
