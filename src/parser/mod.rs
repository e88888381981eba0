// ============================================================================
// Parser Module
// Raw input field text -> validated DecimalValue
// ============================================================================

mod errors;
mod literal;

pub use errors::{ParseError, ParseErrorKind, ParseResult};
pub use literal::LiteralParser;
