use serde::{Deserialize, Serialize};

/// A single token handed over by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    #[serde(default)]
    pub lexeme: String,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Creates an identifier token
    pub fn ident(name: impl Into<String>) -> Self {
        Token::new(TokenKind::Ident, name)
    }

    /// Creates a number literal token
    pub fn number(value: i64) -> Self {
        Token::new(TokenKind::Number, value.to_string())
    }

    /// Creates a keyword or punctuation token carrying its fixed spelling
    pub fn symbol(kind: TokenKind) -> Self {
        Token::new(kind, kind.fixed_text().unwrap_or_default())
    }

    /// The "no symbol" token reported once the stream is exhausted
    pub fn nul() -> Self {
        Token::new(TokenKind::Nul, String::new())
    }
}

/// All token types a PL/0 lexer can produce.
///
/// Discriminants follow the classic numbering printed in lexeme lists, so
/// `TokenKind::Ident as u8 == 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenKind {
    /// End of stream / no symbol
    #[serde(rename = "nulsym")]
    Nul = 1,
    /// Identifier
    #[serde(rename = "identsym")]
    Ident = 2,
    /// Number literal
    #[serde(rename = "numbersym")]
    Number = 3,

    // Operators
    /// `+`
    #[serde(rename = "plussym")]
    Plus = 4,
    /// `-`
    #[serde(rename = "minussym")]
    Minus = 5,
    /// `*`
    #[serde(rename = "multsym")]
    Mult = 6,
    /// `/`
    #[serde(rename = "slashsym")]
    Slash = 7,
    /// `odd`
    #[serde(rename = "oddsym")]
    Odd = 8,
    /// `=`
    #[serde(rename = "eqsym")]
    Eq = 9,
    /// `<>`
    #[serde(rename = "neqsym")]
    Neq = 10,
    /// `<`
    #[serde(rename = "lessym")]
    Less = 11,
    /// `<=`
    #[serde(rename = "leqsym")]
    Leq = 12,
    /// `>`
    #[serde(rename = "gtrsym")]
    Gtr = 13,
    /// `>=`
    #[serde(rename = "geqsym")]
    Geq = 14,

    // Delimiters
    /// `(`
    #[serde(rename = "lparentsym")]
    LParen = 15,
    /// `)`
    #[serde(rename = "rparentsym")]
    RParen = 16,
    /// `,`
    #[serde(rename = "commasym")]
    Comma = 17,
    /// `;`
    #[serde(rename = "semicolonsym")]
    Semicolon = 18,
    /// `.`
    #[serde(rename = "periodsym")]
    Period = 19,
    /// `:=`
    #[serde(rename = "becomessym")]
    Becomes = 20,

    // Keywords
    /// `begin`
    #[serde(rename = "beginsym")]
    Begin = 21,
    /// `end`
    #[serde(rename = "endsym")]
    End = 22,
    /// `if`
    #[serde(rename = "ifsym")]
    If = 23,
    /// `then`
    #[serde(rename = "thensym")]
    Then = 24,
    /// `while`
    #[serde(rename = "whilesym")]
    While = 25,
    /// `do`
    #[serde(rename = "dosym")]
    Do = 26,
    /// `call`
    #[serde(rename = "callsym")]
    Call = 27,
    /// `const`
    #[serde(rename = "constsym")]
    Const = 28,
    /// `var`
    #[serde(rename = "varsym")]
    Var = 29,
    /// `procedure`
    #[serde(rename = "procsym")]
    Procedure = 30,
    /// `write`
    #[serde(rename = "writesym")]
    Write = 31,
    /// `read`
    #[serde(rename = "readsym")]
    Read = 32,
    /// `else`
    #[serde(rename = "elsesym")]
    Else = 33,
}

impl TokenKind {
    /// Every token type, ordered by numeric id
    pub const ALL: [TokenKind; 33] = [
        TokenKind::Nul,
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mult,
        TokenKind::Slash,
        TokenKind::Odd,
        TokenKind::Eq,
        TokenKind::Neq,
        TokenKind::Less,
        TokenKind::Leq,
        TokenKind::Gtr,
        TokenKind::Geq,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Period,
        TokenKind::Becomes,
        TokenKind::Begin,
        TokenKind::End,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Call,
        TokenKind::Const,
        TokenKind::Var,
        TokenKind::Procedure,
        TokenKind::Write,
        TokenKind::Read,
        TokenKind::Else,
    ];

    /// Numeric id used in lexeme lists
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a token type by its numeric id
    pub fn from_id(id: u8) -> Option<TokenKind> {
        let index = usize::from(id).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Name used in the parsing trace (`identsym`, `becomessym`, ...)
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Nul => "nulsym",
            TokenKind::Ident => "identsym",
            TokenKind::Number => "numbersym",
            TokenKind::Plus => "plussym",
            TokenKind::Minus => "minussym",
            TokenKind::Mult => "multsym",
            TokenKind::Slash => "slashsym",
            TokenKind::Odd => "oddsym",
            TokenKind::Eq => "eqsym",
            TokenKind::Neq => "neqsym",
            TokenKind::Less => "lessym",
            TokenKind::Leq => "leqsym",
            TokenKind::Gtr => "gtrsym",
            TokenKind::Geq => "geqsym",
            TokenKind::LParen => "lparentsym",
            TokenKind::RParen => "rparentsym",
            TokenKind::Comma => "commasym",
            TokenKind::Semicolon => "semicolonsym",
            TokenKind::Period => "periodsym",
            TokenKind::Becomes => "becomessym",
            TokenKind::Begin => "beginsym",
            TokenKind::End => "endsym",
            TokenKind::If => "ifsym",
            TokenKind::Then => "thensym",
            TokenKind::While => "whilesym",
            TokenKind::Do => "dosym",
            TokenKind::Call => "callsym",
            TokenKind::Const => "constsym",
            TokenKind::Var => "varsym",
            TokenKind::Procedure => "procsym",
            TokenKind::Write => "writesym",
            TokenKind::Read => "readsym",
            TokenKind::Else => "elsesym",
        }
    }

    /// Source spelling of keywords and symbols.
    ///
    /// Identifiers, numbers and the end-of-stream sentinel have no fixed text.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Nul | TokenKind::Ident | TokenKind::Number => return None,
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mult => "*",
            TokenKind::Slash => "/",
            TokenKind::Odd => "odd",
            TokenKind::Eq => "=",
            TokenKind::Neq => "<>",
            TokenKind::Less => "<",
            TokenKind::Leq => "<=",
            TokenKind::Gtr => ">",
            TokenKind::Geq => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Period => ".",
            TokenKind::Becomes => ":=",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Call => "call",
            TokenKind::Const => "const",
            TokenKind::Var => "var",
            TokenKind::Procedure => "procedure",
            TokenKind::Write => "write",
            TokenKind::Read => "read",
            TokenKind::Else => "else",
        };
        Some(text)
    }

    /// Looks up a keyword or symbol by its source spelling
    pub fn from_fixed_text(text: &str) -> Option<TokenKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.fixed_text() == Some(text))
    }

    /// Check if token is one of the six comparison operators
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Less
                | TokenKind::Leq
                | TokenKind::Gtr
                | TokenKind::Geq
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}
