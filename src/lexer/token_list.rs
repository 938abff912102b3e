//! Decoding of lexer output into token sequences.
//!
//! Two encodings are understood:
//!
//! - **Lexeme lists**, the numeric form printed by classic PL/0 lexers:
//!   `29 2 x 18 2 x 20 3 5 19` reads as `var x; x := 5.`. Identifier (`2`)
//!   and number (`3`) ids are followed by their lexeme; every other id
//!   stands alone.
//! - **JSON** arrays of `{"kind": "identsym", "lexeme": "x"}` objects. The
//!   lexeme may be omitted for keywords and symbols.

use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Encoding of a token list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenListFormat {
    /// Pick JSON when the first non-blank character is `[`, lexemes otherwise
    #[default]
    Auto,
    /// Whitespace-separated numeric ids with inline lexemes
    Lexemes,
    /// JSON array of token objects
    Json,
}

impl TokenListFormat {
    /// Resolves `Auto` against the actual input
    pub fn detect(self, input: &str) -> TokenListFormat {
        match self {
            TokenListFormat::Auto if input.trim_start().starts_with('[') => TokenListFormat::Json,
            TokenListFormat::Auto => TokenListFormat::Lexemes,
            explicit => explicit,
        }
    }
}

/// Decodes a token list in the given format
pub fn decode(input: &str, format: TokenListFormat) -> Result<Vec<Token>> {
    let tokens = match format.detect(input) {
        TokenListFormat::Json => from_json(input)?,
        _ => from_lexeme_list(input)?,
    };
    tracing::debug!(tokens = tokens.len(), "decoded token list");
    Ok(tokens)
}

/// Decodes a numeric lexeme list
pub fn from_lexeme_list(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut entries = input.split_whitespace().enumerate();

    while let Some((position, entry)) = entries.next() {
        let id: u8 = entry.parse().map_err(|_| {
            Error::token_list(position, format!("expected a token id, got `{}`", entry))
        })?;
        let kind = TokenKind::from_id(id)
            .ok_or_else(|| Error::token_list(position, format!("unknown token id {}", id)))?;

        let token = match kind {
            TokenKind::Ident | TokenKind::Number => {
                let (_, lexeme) = entries.next().ok_or_else(|| {
                    Error::token_list(position, format!("{} is missing its lexeme", kind))
                })?;
                Token::new(kind, lexeme)
            }
            _ => Token::symbol(kind),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Decodes a JSON token array, filling in the spelling of keywords and
/// symbols whose lexeme was left out
pub fn from_json(input: &str) -> Result<Vec<Token>> {
    let mut tokens: Vec<Token> = serde_json::from_str(input)?;
    for token in tokens.iter_mut() {
        if token.lexeme.is_empty() {
            if let Some(text) = token.kind.fixed_text() {
                token.lexeme = text.to_string();
            }
        }
    }
    Ok(tokens)
}
