use crate::lexer::{Token, TokenKind};

/// Forward-only view over a borrowed token sequence.
///
/// Reading past the end yields a `nulsym` token instead of failing, so the
/// grammar never has to special-case exhaustion.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    position: usize,
    sentinel: Token,
}

impl<'t> TokenCursor<'t> {
    /// Creates a cursor positioned at the first token
    pub fn new(tokens: &'t [Token]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
            sentinel: Token::nul(),
        }
    }

    /// The token under the cursor, or the sentinel once exhausted
    pub fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.sentinel)
    }

    /// Type of the token under the cursor
    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Moves one token forward; no-op past the end
    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Index of the token under the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of tokens in the underlying sequence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the underlying sequence has no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True once every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
