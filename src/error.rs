use thiserror::Error;

/// Errors that can occur while formatting a document or computing its
/// check digits.
///
/// Validation never produces these — [`crate::cpf::validate`] and
/// [`crate::cnpj::validate`] are total functions over all strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    /// The cleaned input does not have the document type's fixed length.
    #[error("{document} must have {expected} characters, got: {actual}")]
    Length {
        /// Document type name ("CPF" or "CNPJ").
        document: &'static str,
        /// Required length after cleaning.
        expected: usize,
        /// Length actually found.
        actual: usize,
    },

    /// All eleven CPF digits are identical. These sequences are
    /// categorically rejected even when the check-digit arithmetic
    /// happens to hold.
    #[error("CPF with all digits equal is not valid")]
    RepeatedDigits,

    /// A character outside `0-9` / `A-Z` was encountered during
    /// check-digit calculation.
    #[error("invalid character: {character} at position {position}")]
    Character {
        /// The offending character.
        character: char,
        /// Zero-based position within the input.
        position: usize,
    },
}
