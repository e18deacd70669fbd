//! # cadastro
//!
//! Brazilian taxpayer document library: validation, formatting, and
//! generation of CPF (Cadastro de Pessoas Físicas) and alphanumeric CNPJ
//! (Cadastro Nacional da Pessoa Jurídica, per the SERPRO specification).
//!
//! Validation is a total function — any string goes in, `bool` comes out.
//! Formatting returns an error only when the cleaned input cannot possibly
//! be a document of the requested type; it deliberately does not re-check
//! check digits, so call [`cpf::validate`] / [`cnpj::validate`] first when
//! correctness matters.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::{DocumentKind, classify_and_validate, cnpj, cpf};
//!
//! assert!(cpf::validate("123.456.789-09"));
//! assert_eq!(cpf::format("12345678909").unwrap(), "123.456.789-09");
//!
//! assert!(cnpj::validate("12.ABC.345/01DE-35"));
//!
//! let (kind, valid) = classify_and_validate("123.456.789-09");
//! assert_eq!(kind, DocumentKind::Cpf);
//! assert!(valid);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | The `cadastro` binary: bulk validation and generation |

pub mod classify;
pub mod cnpj;
pub mod cpf;
mod error;

pub use crate::classify::{DocumentKind, classify_and_validate};
pub use crate::error::DocumentError;
