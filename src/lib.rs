//! # romanum
//!
//! romanum converts Roman numerals to integers written in Rust.
//! It lexes a numeral string, validates it against the Roman formation rules
//! (ordering, subtractive pairs) and evaluates it to its integer value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    converter::{
        evaluator::{Term, decide, evaluate},
        lexer::tokenize,
        numeral::Numeral,
    },
    error::ConvertError,
};

/// Turns numeral strings into integers.
///
/// This module holds the three stages of a conversion: the symbol table, the
/// lexer that resolves characters through it, and the evaluator that applies
/// the formation rules and sums the result.
///
/// # Responsibilities
/// - Maps the seven numeral letters to their rank and value.
/// - Rejects characters that are not numeral letters.
/// - Decides additive or subtractive treatment and detects illegal
///   configurations.
pub mod converter;
/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors a conversion can produce. Each error carries
/// the offending numerals and positions, and a stable diagnostic code.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Distinguishes unknown symbols from rule violations.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Result type returned by the public conversion functions.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Converts a Roman numeral string to its integer value.
///
/// Every character must be one of the upper-case letters `I`, `V`, `X`, `L`,
/// `C`, `D` and `M`. The function is pure; each call keeps its own
/// accumulator.
///
/// # Errors
/// - [`ConvertError::Empty`] if `source` is empty.
/// - [`ConvertError::Symbol`] if a character is not a numeral letter.
/// - [`ConvertError::Rule`] if the numerals break a formation rule.
///
/// # Examples
/// ```
/// use romanum::{convert, error::ConvertError};
///
/// assert_eq!(convert("MCMXLV").unwrap(), 1945);
/// assert_eq!(convert("acsfga").unwrap_err().code(), 1);
/// assert_eq!(convert(""), Err(ConvertError::Empty));
/// ```
pub fn convert(source: &str) -> ConvertResult<u64> {
    let result = read(source).and_then(|numerals| evaluate(&numerals).map_err(ConvertError::from));

    match &result {
        Ok(total) => debug!(source, total, "converted"),
        Err(error) => debug!(source, %error, "rejected"),
    }

    result
}

/// Converts a Roman numeral string into its signed terms.
///
/// Performs the same checks as [`convert`], but returns every numeral together
/// with the sign it contributes instead of the sum.
///
/// # Errors
/// Fails exactly when [`convert`] fails.
///
/// # Examples
/// ```
/// use romanum::explain;
///
/// let terms: Vec<String> = explain("XIV").unwrap().iter().map(ToString::to_string).collect();
/// assert_eq!(terms, vec!["+10", "-1", "+5"]);
/// ```
pub fn explain(source: &str) -> ConvertResult<Vec<Term>> {
    let numerals = read(source)?;
    Ok(decide(&numerals)?)
}

fn read(source: &str) -> ConvertResult<Vec<Numeral>> {
    if source.is_empty() {
        return Err(ConvertError::Empty);
    }

    Ok(tokenize(source)?)
}
