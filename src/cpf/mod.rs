//! CPF — the 11-digit Brazilian individual taxpayer ID.
//!
//! Nine body digits followed by two check digits, each computed by a
//! weighted modulo-11 pass over the preceding digits. The ten sequences
//! with all digits equal pass that arithmetic but are rejected outright.
//!
//! # Example
//!
//! ```rust
//! use cadastro::cpf;
//!
//! assert!(cpf::validate("123.456.789-09"));
//! assert!(!cpf::validate("123.456.789-00"));
//!
//! assert_eq!(cpf::format("12345678909").unwrap(), "123.456.789-09");
//! assert_eq!(cpf::check_origin("12345678909"), Some("Paraná and Santa Catarina"));
//!
//! let generated = cpf::generate();
//! assert!(cpf::validate(&generated));
//! ```

mod generate;
mod origin;
mod validate;

pub use generate::{generate, generate_with};
pub use origin::check_origin;
pub use validate::{CPF_LENGTH, format, validate};
