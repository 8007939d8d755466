/// Conversion errors.
///
/// The top-level error returned by the public entry points. Wraps symbol and
/// rule errors and adds the empty-input case.
pub mod convert_error;
/// Rule errors.
///
/// Contains all violations of the formation rules detected by the evaluator,
/// such as illegal subtractive pairs or numerals out of order.
pub mod rule_error;
/// Symbol errors.
///
/// Defines the errors raised while lexing, before any evaluation happens.
pub mod symbol_error;

pub use convert_error::ConvertError;
pub use rule_error::RuleError;
pub use symbol_error::SymbolError;
