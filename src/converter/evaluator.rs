use std::fmt;

use tracing::trace;

use crate::{converter::numeral::Numeral, error::RuleError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuleError` describing the violated formation rule.
pub type EvalResult<T> = Result<T, RuleError>;

/// Whether a numeral's value is added to or subtracted from the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// The value counts towards the total.
    Add,
    /// The value is taken away, as the `I` in `IX`.
    Subtract,
}

/// One evaluated position: a numeral and the sign decided for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// The numeral at this position.
    pub numeral: Numeral,
    /// Whether the numeral is added or subtracted.
    pub sign:    Sign,
}

impl Term {
    /// Returns the numeral's value with the decided sign applied.
    #[must_use]
    pub fn signed_value(self) -> i64 {
        let value = i64::from(self.numeral.value());
        match self.sign {
            Sign::Add => value,
            Sign::Subtract => -value,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Sign::Add => write!(f, "+{}", self.numeral.value()),
            Sign::Subtract => write!(f, "-{}", self.numeral.value()),
        }
    }
}

/// Evaluates a sequence of numerals to its integer value.
///
/// An empty sequence evaluates to `0`; rejecting empty input is the caller's
/// decision.
///
/// # Errors
/// Returns the first [`RuleError`] found while scanning left to right.
///
/// # Example
/// ```
/// use romanum::converter::{evaluator::evaluate, numeral::Numeral::{C, I, L, M, X}};
///
/// assert_eq!(evaluate(&[L, I, X]).unwrap(), 59);
/// assert_eq!(evaluate(&[C, M, L, I, I, I]).unwrap(), 953);
/// assert!(evaluate(&[I, M]).is_err());
/// ```
pub fn evaluate(numerals: &[Numeral]) -> EvalResult<u64> {
    total(&decide(numerals)?)
}

/// Decides, for every position, whether its numeral is added or subtracted.
///
/// Each position is compared with the one after it:
/// - The last numeral is always added.
/// - A numeral followed by one ranked one or two steps higher is subtracted.
/// - A numeral followed by one of equal or lower rank is added, provided no
///   numeral between the one after next and the last (exclusive) outranks it.
/// - A numeral followed by one ranked three or more steps higher is rejected.
///
/// # Errors
/// - [`RuleError::IllegalSubtractiveSkip`] when the next numeral is too large.
/// - [`RuleError::OutOfOrderMagnitude`] when a larger numeral appears further
///   right after a descending run began.
///
/// # Example
/// ```
/// use romanum::converter::{evaluator::{Sign, decide}, numeral::Numeral::{I, V, X}};
///
/// let signs: Vec<Sign> = decide(&[X, I, V]).unwrap().iter().map(|t| t.sign).collect();
/// assert_eq!(signs, vec![Sign::Add, Sign::Subtract, Sign::Add]);
/// ```
pub fn decide(numerals: &[Numeral]) -> EvalResult<Vec<Term>> {
    numerals.iter()
            .enumerate()
            .map(|(position, &numeral)| {
                let sign = decide_at(numerals, position, numeral)?;
                trace!(position, %numeral, ?sign, "decided");
                Ok(Term { numeral, sign })
            })
            .collect()
}

/// Sums the signed values of already decided terms.
///
/// # Errors
/// Returns [`RuleError::NegativeTotal`] if the sum is below zero. Terms produced
/// by [`decide`] always sum to zero or more.
pub fn total(terms: &[Term]) -> EvalResult<u64> {
    let sum: i64 = terms.iter().map(|term| term.signed_value()).sum();
    u64::try_from(sum).map_err(|_| RuleError::NegativeTotal { total: sum })
}

fn decide_at(numerals: &[Numeral], position: usize, numeral: Numeral) -> EvalResult<Sign> {
    let Some(&next) = numerals.get(position + 1) else {
        return Ok(Sign::Add);
    };

    let rank = numeral.rank();
    let next_rank = next.rank();

    if next_rank == rank + 1 || next_rank == rank + 2 {
        Ok(Sign::Subtract)
    } else if next_rank <= rank {
        ensure_no_larger_ahead(numerals, position, numeral)?;
        Ok(Sign::Add)
    } else {
        Err(RuleError::IllegalSubtractiveSkip { numeral,
                                                position,
                                                next })
    }
}

/// Scans positions `position + 2` up to, but not including, the last one.
fn ensure_no_larger_ahead(numerals: &[Numeral], position: usize, numeral: Numeral) -> EvalResult<()> {
    let last = numerals.len().saturating_sub(1);

    let larger = numerals[..last].iter()
                                 .enumerate()
                                 .skip(position + 2)
                                 .find(|(_, later)| later.rank() > numeral.rank());

    match larger {
        Some((later_position, &later)) => Err(RuleError::OutOfOrderMagnitude { numeral,
                                                                              position,
                                                                              later,
                                                                              later_position }),
        None => Ok(()),
    }
}
