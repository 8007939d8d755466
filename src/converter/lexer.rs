use logos::Logos;

use crate::{
    converter::numeral::{Numeral, lookup},
    error::SymbolError,
};

/// A lexical token of a Roman numeral string.
///
/// Numeral strings have no separators, comments or whitespace, so the only
/// token is a single numeral letter. Anything else is a lexer error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// One of `I`, `V`, `X`, `L`, `C`, `D` or `M`.
    #[regex(r"[IVXLCDM]", parse_numeral)]
    Numeral(Numeral),
}

/// Resolves the current single-letter slice through the symbol table.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Numeral)`: The numeral spelled by the slice.
/// - `None`: If the slice is not a numeral letter.
fn parse_numeral(lex: &logos::Lexer<Token>) -> Option<Numeral> {
    lex.slice().chars().next().and_then(lookup)
}

/// Splits a numeral string into its numerals.
///
/// Lexing stops at the first character that is not a numeral letter. The
/// reported position counts characters, not bytes, from zero.
///
/// # Errors
/// Returns [`SymbolError::Unknown`] for the first unrecognized character.
///
/// # Example
/// ```
/// use romanum::{converter::{lexer::tokenize, numeral::Numeral}, error::SymbolError};
///
/// assert_eq!(tokenize("XIV").unwrap(), vec![Numeral::X, Numeral::I, Numeral::V]);
/// assert_eq!(tokenize("XäV").unwrap_err(),
///            SymbolError::Unknown { symbol: 'ä', position: 1 });
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Numeral>, SymbolError> {
    let mut numerals = Vec::with_capacity(source.len());
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(Token::Numeral(numeral)) = token {
            numerals.push(numeral);
        } else {
            let start = lexer.span().start;
            // Every token before the error is a single ASCII letter, so `start`
            // sits on a character boundary.
            let symbol = source[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(SymbolError::Unknown { symbol,
                                              position: source[..start].chars().count() });
        }
    }

    Ok(numerals)
}
