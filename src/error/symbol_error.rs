use thiserror::Error;

/// Represents all errors that can occur while lexing a numeral string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Found a character that is not a Roman numeral letter.
    #[error("Unknown symbol '{symbol}' at position {position}.")]
    Unknown {
        /// The offending character.
        symbol:   char,
        /// Zero-based character index of the symbol in the input.
        position: usize,
    },
}

impl SymbolError {
    /// Returns the diagnostic code reported for this error.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Unknown { .. } => 1,
        }
    }
}
