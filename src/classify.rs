//! Document type auto-detection.
//!
//! Dispatches an arbitrary string to the CPF or CNPJ validator based on
//! its length once formatting characters are stripped.

use std::fmt;

use crate::{cnpj, cpf};

/// Document types recognized by [`classify_and_validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// 11-digit individual taxpayer ID.
    Cpf,
    /// 14-character legal-entity taxpayer ID.
    Cnpj,
    /// Neither length matched; no validator was invoked.
    Unknown,
}

impl DocumentKind {
    /// The conventional label for this document type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identify a document by length and run the matching validator.
///
/// Only the formatting characters `.`, `-`, and `/` are stripped for the
/// length measurement; the original string is what gets validated, since
/// each validator performs its own cleaning. A length matching neither
/// document type yields `(Unknown, false)` without invoking a validator.
pub fn classify_and_validate(value: &str) -> (DocumentKind, bool) {
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '/'))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    match stripped.len() {
        cpf::CPF_LENGTH => (DocumentKind::Cpf, cpf::validate(value)),
        cnpj::CNPJ_LENGTH => (DocumentKind::Cnpj, cnpj::validate(value)),
        _ => (DocumentKind::Unknown, false),
    }
}
