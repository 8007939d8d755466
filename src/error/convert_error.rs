use thiserror::Error;

use crate::error::{RuleError, SymbolError};

/// Represents every way a conversion can fail.
///
/// Symbol errors are found before evaluation starts; rule errors during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input contained no characters.
    #[error("Input is empty.")]
    Empty,
    /// A character could not be resolved to a numeral.
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    /// The numerals break a formation rule.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl ConvertError {
    /// Returns the diagnostic code reported for this error.
    ///
    /// | Code | Failure                    |
    /// |------|----------------------------|
    /// | 1    | unknown symbol             |
    /// | 2    | out-of-order magnitude     |
    /// | 3    | illegal subtractive skip   |
    /// | 4    | empty input                |
    /// | 5    | negative total             |
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Empty => 4,
            Self::Symbol(e) => e.code(),
            Self::Rule(e) => e.code(),
        }
    }
}
