//! PL/0 parser module
//!
//! Validates token streams against the PL/0 grammar by recursive descent,
//! recording declarations and a parsing trace along the way.

mod cursor;
mod pl0_parser;
pub mod trace;

pub use cursor::TokenCursor;
pub use pl0_parser::Pl0Parser;
pub use trace::{NoTrace, NonTerminal, Trace, TraceEvent, TraceLog, WriterTrace};

use crate::error::ParseError;
use crate::lexer::Token;
use crate::symbol_table::SymbolTable;

/// Parses `tokens` as a complete program, reporting events to `trace`.
///
/// Each call builds its own parser state, so independent parses never share
/// anything.
pub fn parse_program<T: Trace>(
    tokens: &[Token],
    trace: T,
) -> std::result::Result<SymbolTable, ParseError> {
    Pl0Parser::new(tokens, trace).parse()
}
