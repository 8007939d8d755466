/// The evaluator decides the sign of every numeral and sums the result.
///
/// The evaluator walks the numerals once from left to right, comparing each
/// with its right neighbour to decide whether it is added or subtracted, and
/// rejects configurations the Roman system does not allow.
///
/// # Responsibilities
/// - Decides additive or subtractive treatment per position.
/// - Reports illegal subtractive pairs and out-of-order magnitudes.
/// - Sums the signed values into the final integer.
pub mod evaluator;
/// The lexer module turns numeral strings into numerals.
///
/// The lexer reads the raw input and produces one numeral per letter, stopping
/// at the first character that is not a Roman numeral letter.
///
/// # Responsibilities
/// - Converts the input character stream into numerals.
/// - Reports unknown symbols together with their position.
pub mod lexer;
/// The symbol table.
///
/// Maps each of the seven numeral letters to its rank and value.
pub mod numeral;
