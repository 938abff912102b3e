//! End-to-end parses of small PL/0 programs through the public entry points

use pl0parse::{parse, parse_program, NoTrace, ParseError, Symbol, SymbolKind, Token, TokenKind};

/// Spell a program as space-separated words and turn it into lexer tokens
fn tokens(source: &str) -> Vec<Token> {
    source
        .split_whitespace()
        .map(|word| match TokenKind::from_fixed_text(word) {
            Some(kind) => Token::symbol(kind),
            None if word.chars().all(|c| c.is_ascii_digit()) => Token::new(TokenKind::Number, word),
            None => Token::ident(word),
        })
        .collect()
}

fn run(source: &str) -> (i32, String) {
    let mut out = Vec::new();
    let code = parse(&tokens(source), &mut out);
    (code, String::from_utf8(out).unwrap())
}

// ====================
// Successful programs
// ====================

#[test]
fn test_const_and_var_program() {
    let source = "const a = 5 ; var x ; begin x := a + 1 end .";
    let (code, text) = run(source);
    assert_eq!(code, 0);
    assert!(text.contains("PARSING WAS SUCCESSFUL."));

    let symbols = parse_program(&tokens(source), NoTrace).unwrap();
    assert_eq!(
        symbols.as_slice(),
        &[Symbol::constant("a", 0, 5), Symbol::variable("x", 0)]
    );
}

#[test]
fn test_period_only_program() {
    let (code, text) = run(".");
    assert_eq!(code, 0);
    assert!(text.ends_with("Name        Kind       Level  Value\n"));
}

#[test]
fn test_full_program() {
    let source = "
        const max = 100 , min = 0 ;
        var n , sum ;
        procedure accumulate ;
            var i ;
            begin
                i := min ;
                while i <= n do
                begin
                    sum := sum + i ;
                    i := i + 1
                end
            end ;
        begin
            read n ;
            if n > max then n := max else n := ( n * 2 ) / 2 ;
            sum := 0 ;
            call accumulate ;
            if odd sum then write sum
        end .";
    let symbols = parse_program(&tokens(source), NoTrace).unwrap();

    let rows: Vec<(&str, SymbolKind, u32)> = symbols
        .iter()
        .map(|s| (s.name.as_str(), s.kind, s.level))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("max", SymbolKind::Constant, 0),
            ("min", SymbolKind::Constant, 0),
            ("n", SymbolKind::Variable, 0),
            ("sum", SymbolKind::Variable, 0),
            ("accumulate", SymbolKind::Procedure, 0),
            ("i", SymbolKind::Variable, 1),
        ]
    );
}

#[test]
fn test_nested_procedures_levels() {
    let source = "
        procedure outer ;
            procedure inner ;
                var deep ;
                deep := 1 ;
            call inner ;
        var top ;
        call outer .";
    // `var` after a procedure is not a block prefix, so this stops at the
    // statement position
    assert_eq!(run(source).0, 6);

    let source = "
        var top ;
        procedure outer ;
            procedure inner ;
                var deep ;
                deep := 1 ;
            call inner ;
        call outer .";
    let symbols = parse_program(&tokens(source), NoTrace).unwrap();
    assert_eq!(
        symbols.as_slice(),
        &[
            Symbol::variable("top", 0),
            Symbol::procedure("outer", 0),
            Symbol::procedure("inner", 1),
            Symbol::variable("deep", 2),
        ]
    );
    assert_eq!(symbols.iter().map(|s| s.level).max(), Some(2));
}

#[test]
fn test_duplicate_declarations_are_kept() {
    let symbols = parse_program(&tokens("var x , x ; ."), NoTrace).unwrap();
    assert_eq!(symbols.len(), 2);
}

// ====================
// Grammar violations
// ====================

#[test]
fn test_equals_used_for_assignment() {
    let (code, text) = run("var x ; x = 1 .");
    assert_eq!(code, 7);
    assert!(text.ends_with("PARSING ERROR[7]: ':=' expected in assignment statement.\n"));
    assert!(!text.contains("Symbol Table"));
}

#[test]
fn test_constant_without_equals() {
    assert_eq!(run("const a 5 ;").0, 2);
}

#[test]
fn test_missing_period() {
    assert_eq!(run("begin write x end").0, 6);
}

#[test]
fn test_unclosed_parenthesis() {
    assert_eq!(run("var x ; x := ( 1 + 2 .").0, 13);
}

#[test]
fn test_each_violation_code() {
    let cases = [
        ("const a = ; .", ParseError::NumberExpected),
        ("const a 5 ; .", ParseError::EqualsExpected),
        ("var ; .", ParseError::IdentifierExpected),
        ("var x .", ParseError::VarSemicolonExpected),
        ("const a = 1 .", ParseError::SemicolonExpected),
        ("x := 1", ParseError::PeriodExpected),
        ("x 1 .", ParseError::BecomesExpected),
        ("call 1 .", ParseError::CallIdentifierExpected),
        ("if odd x x := 1 .", ParseError::ThenExpected),
        ("begin x := 1 .", ParseError::EndExpected),
        ("while odd x x := 1 .", ParseError::DoExpected),
        ("if x then x := 1 .", ParseError::RelationalOperatorExpected),
        ("x := ( 1 .", ParseError::RightParenMissing),
        ("x := * 1 .", ParseError::InvalidFactorStart),
    ];

    for (source, expected) in cases {
        let (code, text) = run(source);
        assert_eq!(code, i32::from(expected.code()), "source: {}", source);
        assert!(
            text.ends_with(&format!("PARSING ERROR[{}]: {}.\n", expected.code(), expected)),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_first_error_wins() {
    // Missing `then` is reported before the missing period
    assert_eq!(run("if odd x x := ( 1").0, 9);
}

// ====================
// Repeated parses
// ====================

#[test]
fn test_repeated_parses_are_identical() {
    for source in ["const a = 5 ; var x ; begin x := a + 1 end .", "var x ; x = 1 ."] {
        let first = run(source);
        let second = run(source);
        assert_eq!(first, second);
    }
}

#[test]
fn test_failed_parse_leaves_nothing_behind() {
    assert_eq!(run("procedure p ; x = 1 ; .").0, 7);
    let symbols = parse_program(&tokens("var y ; ."), NoTrace).unwrap();
    assert_eq!(symbols.as_slice(), &[Symbol::variable("y", 0)]);
}
