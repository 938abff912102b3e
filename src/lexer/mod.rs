//! Lexer-side types for PL/0
//!
//! Tokenizing source text is the job of an external lexer. This module holds
//! the token model it produces and the decoders for its output.

mod token;
pub mod token_list;

pub use token::{Token, TokenKind};
pub use token_list::TokenListFormat;
