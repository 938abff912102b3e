//! Decoding lexer output and feeding it to the parser

use pl0parse::lexer::token_list::{self, decode};
use pl0parse::{parse_program, Error, NoTrace, Symbol, Token, TokenKind, TokenListFormat};

const LEXEMES: &str = "28 2 a 9 3 5 18 29 2 x 18 21 2 x 20 2 a 4 3 1 22 19";

const JSON: &str = r#"[
    {"kind": "constsym"},
    {"kind": "identsym", "lexeme": "a"},
    {"kind": "eqsym"},
    {"kind": "numbersym", "lexeme": "5"},
    {"kind": "semicolonsym"},
    {"kind": "varsym"},
    {"kind": "identsym", "lexeme": "x"},
    {"kind": "semicolonsym"},
    {"kind": "beginsym"},
    {"kind": "identsym", "lexeme": "x"},
    {"kind": "becomessym"},
    {"kind": "identsym", "lexeme": "a"},
    {"kind": "plussym"},
    {"kind": "numbersym", "lexeme": "1"},
    {"kind": "endsym"},
    {"kind": "periodsym"}
]"#;

#[test]
fn test_both_encodings_agree() {
    let from_lexemes = decode(LEXEMES, TokenListFormat::Auto).unwrap();
    let from_json = decode(JSON, TokenListFormat::Auto).unwrap();
    assert_eq!(from_lexemes, from_json);
    assert_eq!(from_lexemes.len(), 16);
}

#[test]
fn test_decoded_program_parses() {
    let tokens = decode(JSON, TokenListFormat::Json).unwrap();
    let symbols = parse_program(&tokens, NoTrace).unwrap();
    assert_eq!(
        symbols.as_slice(),
        &[Symbol::constant("a", 0, 5), Symbol::variable("x", 0)]
    );
}

#[test]
fn test_json_written_by_serde_reads_back() {
    let tokens = vec![Token::ident("x"), Token::symbol(TokenKind::Period)];
    let json = serde_json::to_string(&tokens).unwrap();
    assert!(json.contains(r#""kind":"identsym""#));
    assert_eq!(token_list::from_json(&json).unwrap(), tokens);
}

#[test]
fn test_forced_format_mismatch() {
    let err = decode(LEXEMES, TokenListFormat::Json).unwrap_err();
    assert!(matches!(err, Error::Json(_)));

    let err = decode(JSON, TokenListFormat::Lexemes).unwrap_err();
    assert!(matches!(err, Error::TokenList { position: 0, .. }));
}

#[test]
fn test_decode_error_names_position() {
    let err = decode("29 2 x 18 0 19", TokenListFormat::Lexemes).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown token id 0"), "{}", message);
    assert!(matches!(err, Error::TokenList { position: 4, .. }));
}

#[test]
fn test_number_lexeme_kept_verbatim() {
    let input = "28 2 big 9 3 99999999999999999999 18 19";
    let tokens = decode(input, TokenListFormat::Lexemes).unwrap();
    assert_eq!(tokens[3].lexeme, "99999999999999999999");
    // Too large for the symbol table value
    assert_eq!(parse_program(&tokens, NoTrace).unwrap_err().code(), 1);
}
