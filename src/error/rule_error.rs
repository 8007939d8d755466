use thiserror::Error;

use crate::converter::numeral::Numeral;

/// Represents all violations of the numeral formation rules found during
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A larger numeral appears to the right after a descending run began.
    #[error("'{later}' at position {later_position} is larger than '{numeral}' at position \
             {position}, which was already added.")]
    OutOfOrderMagnitude {
        /// The numeral that began the descending run.
        numeral:        Numeral,
        /// Position of `numeral`.
        position:       usize,
        /// The larger numeral found further right.
        later:          Numeral,
        /// Position of `later`.
        later_position: usize,
    },
    /// A numeral is followed by one three or more ranks higher.
    #[error("'{numeral}' at position {position} cannot be subtracted from '{next}'.")]
    IllegalSubtractiveSkip {
        /// The numeral that would be subtracted.
        numeral:  Numeral,
        /// Position of `numeral`.
        position: usize,
        /// The numeral immediately after it.
        next:     Numeral,
    },
    /// The signed values summed to less than zero.
    #[error("Total {total} is negative.")]
    NegativeTotal {
        /// The signed sum.
        total: i64,
    },
}

impl RuleError {
    /// Returns the diagnostic code reported for this error.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::OutOfOrderMagnitude { .. } => 2,
            Self::IllegalSubtractiveSkip { .. } => 3,
            Self::NegativeTotal { .. } => 5,
        }
    }
}
