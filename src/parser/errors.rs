// ============================================================================
// Parse Errors
// ============================================================================

use thiserror::Error;

/// Why a literal was rejected, in the order the checks run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    #[error("enter a number")]
    EmptyInput,

    #[error("invalid character '{found}' (letters and symbols are not allowed)")]
    InvalidCharacter { found: char },

    #[error("exponential notation is not allowed")]
    ExponentNotation,

    #[error("sign is out of place")]
    MisplacedSign,

    #[error("too many decimal separators")]
    MultipleSeparators,

    #[error("digit groups must be separated by single spaces in groups of three")]
    InvalidGrouping,

    #[error("incomplete number")]
    IncompleteNumber,

    #[error("invalid numeric format")]
    InvalidNumericFormat,
}

/// A rejected literal together with the raw text that was entered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub input: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// Result type alias for literal parsing
pub type ParseResult<T> = Result<T, ParseError>;
