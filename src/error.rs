//! Error types for the PL/0 parser

use thiserror::Error;

/// Grammar violations reported by the parser.
///
/// Each variant maps to exactly one failed expectation and carries a stable
/// numeric code (see [`ParseError::code`]). The first violation stops the
/// parse; no recovery is attempted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// **Triggered by:** `const a = b;`
    #[error("Number expected after '=' in constant declaration")]
    NumberExpected,

    /// **Triggered by:** `const a 5;`
    #[error("'=' expected after identifier in constant declaration")]
    EqualsExpected,

    /// Missing name in a declaration, procedure header, `read` or `write`
    #[error("Identifier expected")]
    IdentifierExpected,

    /// **Triggered by:** `var x.`
    #[error("Semicolon expected after variable declaration")]
    VarSemicolonExpected,

    /// Missing `;` after a constant list or a procedure block
    #[error("Semicolon expected")]
    SemicolonExpected,

    /// Program does not end with `.`
    #[error("Period expected")]
    PeriodExpected,

    /// **Triggered by:** `x = 1`
    #[error("':=' expected in assignment statement")]
    BecomesExpected,

    /// `call` not followed by a procedure name
    #[error("Identifier expected after 'call'")]
    CallIdentifierExpected,

    /// `if` condition not followed by `then`
    #[error("'then' expected")]
    ThenExpected,

    /// `begin` block not closed by `end`
    #[error("'end' expected")]
    EndExpected,

    /// `while` condition not followed by `do`
    #[error("'do' expected")]
    DoExpected,

    /// Condition without one of `= <> < <= > >=`
    #[error("Relational operator expected")]
    RelationalOperatorExpected,

    /// **Triggered by:** `(1 + 2` with nothing to close it
    #[error("Right parenthesis missing")]
    RightParenMissing,

    /// Factor starting with something other than an identifier, number or `(`
    #[error("The preceding factor cannot begin with this symbol")]
    InvalidFactorStart,
}

impl ParseError {
    /// Stable numeric code in `1..=14`
    pub fn code(self) -> u8 {
        match self {
            ParseError::NumberExpected => 1,
            ParseError::EqualsExpected => 2,
            ParseError::IdentifierExpected => 3,
            ParseError::VarSemicolonExpected => 4,
            ParseError::SemicolonExpected => 5,
            ParseError::PeriodExpected => 6,
            ParseError::BecomesExpected => 7,
            ParseError::CallIdentifierExpected => 8,
            ParseError::ThenExpected => 9,
            ParseError::EndExpected => 10,
            ParseError::DoExpected => 11,
            ParseError::RelationalOperatorExpected => 12,
            ParseError::RightParenMissing => 13,
            ParseError::InvalidFactorStart => 14,
        }
    }
}

/// Errors raised around the grammar: reading token lists and writing reports
#[derive(Error, Debug)]
pub enum Error {
    /// Grammar violation
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Lexeme list could not be decoded
    ///
    /// **Triggered by:** an unknown token id, or an identifier/number id with
    /// no lexeme after it
    #[error("Malformed token list at entry {position}: {message}")]
    TokenList {
        /// Zero-based index of the offending entry
        position: usize,
        /// Error description
        message: String,
    },

    /// JSON token list could not be decoded
    #[error("Invalid JSON token list: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a token list error at the given entry
    pub fn token_list(position: usize, message: impl Into<String>) -> Self {
        Error::TokenList {
            position,
            message: message.into(),
        }
    }
}

/// Result type for pl0parse operations
pub type Result<T> = std::result::Result<T, Error>;
