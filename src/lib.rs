#![allow(missing_docs)]
//! # pl0parse - PL/0 syntax checking for lexer output
//!
//! Validates a PL/0 token stream against the language grammar with a
//! recursive-descent parser, building a symbol table of every declared
//! constant, variable and procedure along with its nesting level. Every
//! consumed token and every grammar rule entered can be traced.
//!
//! Tokenizing source text is out of scope: input is the token list an
//! external lexer produced, either as [`Token`] values or decoded with
//! [`lexer::token_list`].
//!
//! ## Quick Start
//!
//! ```rust
//! use pl0parse::{parse_program, NoTrace, SymbolKind, Token, TokenKind};
//!
//! // var x; x := 5.
//! let tokens = vec![
//!     Token::symbol(TokenKind::Var),
//!     Token::ident("x"),
//!     Token::symbol(TokenKind::Semicolon),
//!     Token::ident("x"),
//!     Token::symbol(TokenKind::Becomes),
//!     Token::number(5),
//!     Token::symbol(TokenKind::Period),
//! ];
//!
//! let symbols = parse_program(&tokens, NoTrace).unwrap();
//! assert_eq!(symbols.len(), 1);
//! assert_eq!(symbols.as_slice()[0].kind, SymbolKind::Variable);
//! ```
//!
//! ### Text report
//!
//! [`parse`] writes the classic parsing history and returns the integer
//! outcome, `0` for success or the violation code:
//!
//! ```rust
//! use pl0parse::{lexer::token_list, parse};
//!
//! // begin write x end   (no closing period)
//! let tokens = token_list::from_lexeme_list("21 31 2 x 22").unwrap();
//! let mut out = Vec::new();
//!
//! assert_eq!(parse(&tokens, &mut out), 6);
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with("PARSING ERROR[6]: Period expected.\n"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Lexer output → token_list → [Token] → Pl0Parser → SymbolTable
//!                                          ↓
//!                                        Trace
//! ```
//!
//! - [`Pl0Parser`] - one method per grammar rule, single-token lookahead
//! - [`TokenCursor`] - forward-only token view with an end-of-stream sentinel
//! - [`SymbolTable`] - insertion-ordered declaration record
//! - [`Trace`] - receiver of "token consumed" / "rule entered" events
//! - [`ParseError`] - the fourteen grammar violations, first one wins

pub mod error;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod symbol_table;

// Re-export main types
pub use error::{Error, ParseError, Result};
pub use lexer::{Token, TokenKind, TokenListFormat};
pub use parser::{
    parse_program, NoTrace, NonTerminal, Pl0Parser, TokenCursor, Trace, TraceEvent, TraceLog,
    WriterTrace,
};
pub use report::{parse, report, ParseOptions, ParseOutcome};
pub use symbol_table::{Symbol, SymbolKind, SymbolTable};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::lexer::{Token, TokenKind};

    /// Builds tokens from space-separated words: keywords and symbols by
    /// spelling, digit runs as numbers, anything else as an identifier.
    pub fn tokens(source: &str) -> Vec<Token> {
        source
            .split_whitespace()
            .map(|word| match TokenKind::from_fixed_text(word) {
                Some(kind) => Token::symbol(kind),
                None if word.chars().all(|c| c.is_ascii_digit()) => {
                    Token::new(TokenKind::Number, word)
                }
                None => Token::ident(word),
            })
            .collect()
    }
}
