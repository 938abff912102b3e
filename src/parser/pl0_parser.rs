use super::cursor::TokenCursor;
use super::trace::{NonTerminal, Trace};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::symbol_table::{Symbol, SymbolTable};

type Result<T> = std::result::Result<T, ParseError>;

/// Recursive-descent parser for PL/0 token streams.
///
/// One method per grammar rule, each deciding its branch from the current
/// token alone. Rules report themselves to the trace on entry, except the
/// declaration sections, which `block` announces whether or not they are
/// present. Every consumed token is reported before the cursor moves. Declarations are
/// collected into a [`SymbolTable`] tagged with the nesting level they occur
/// at.
pub struct Pl0Parser<'t, T: Trace> {
    cursor: TokenCursor<'t>,
    trace: T,
    level: u32,
    symbols: SymbolTable,
}

impl<'t, T: Trace> Pl0Parser<'t, T> {
    /// Creates a parser over the given tokens, reporting to `trace`
    pub fn new(tokens: &'t [Token], trace: T) -> Self {
        Pl0Parser {
            cursor: TokenCursor::new(tokens),
            trace,
            level: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// Parses a complete program and returns its declarations.
    ///
    /// Tokens after the closing `.` are left unread.
    pub fn parse(mut self) -> Result<SymbolTable> {
        tracing::debug!(tokens = self.cursor.len(), "parsing token stream");

        match self.program() {
            Ok(()) => {
                tracing::debug!(
                    symbols = self.symbols.len(),
                    consumed = self.cursor.position(),
                    "parse succeeded"
                );
                Ok(self.symbols)
            }
            Err(err) => {
                tracing::debug!(
                    code = err.code(),
                    position = self.cursor.position(),
                    token = %self.cursor.kind(),
                    "parse failed: {}",
                    err
                );
                Err(err)
            }
        }
    }

    // program := block '.'
    fn program(&mut self) -> Result<()> {
        self.enter(NonTerminal::Program);

        self.block()?;
        self.expect(TokenKind::Period, ParseError::PeriodExpected)
    }

    // block := [ const_decl ] [ var_decl ] [ proc_decl ] statement
    fn block(&mut self) -> Result<()> {
        self.enter(NonTerminal::Block);

        // Every section is announced, present or not
        self.enter(NonTerminal::ConstDeclaration);
        if self.check(TokenKind::Const) {
            self.const_declaration()?;
        }
        self.enter(NonTerminal::VarDeclaration);
        if self.check(TokenKind::Var) {
            self.var_declaration()?;
        }
        self.enter(NonTerminal::ProcDeclaration);
        if self.check(TokenKind::Procedure) {
            self.proc_declaration()?;
        }
        self.statement()
    }

    // const_decl := 'const' ident '=' number { ',' ident '=' number } ';'
    fn const_declaration(&mut self) -> Result<()> {
        loop {
            self.consume(); // 'const' or ','
            let name = self.expect_identifier(ParseError::IdentifierExpected)?;
            self.expect(TokenKind::Eq, ParseError::EqualsExpected)?;
            let value = self.expect_number()?;
            self.symbols.insert(Symbol::constant(name, self.level, value));

            if !self.check(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::Semicolon, ParseError::SemicolonExpected)
    }

    // var_decl := 'var' ident { ',' ident } ';'
    fn var_declaration(&mut self) -> Result<()> {
        loop {
            self.consume(); // 'var' or ','
            let name = self.expect_identifier(ParseError::IdentifierExpected)?;
            self.symbols.insert(Symbol::variable(name, self.level));

            if !self.check(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::Semicolon, ParseError::VarSemicolonExpected)
    }

    // proc_decl := { 'procedure' ident ';' block ';' }
    fn proc_declaration(&mut self) -> Result<()> {
        while self.check(TokenKind::Procedure) {
            self.consume();
            let name = self.expect_identifier(ParseError::IdentifierExpected)?;
            // The procedure itself belongs to the enclosing block
            self.symbols.insert(Symbol::procedure(name, self.level));
            self.expect(TokenKind::Semicolon, ParseError::SemicolonExpected)?;

            self.level += 1;
            tracing::trace!(level = self.level, "entering procedure body");
            let body = self.block();
            self.level -= 1;
            body?;

            self.expect(TokenKind::Semicolon, ParseError::SemicolonExpected)?;
        }

        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        self.enter(NonTerminal::Statement);

        match self.cursor.kind() {
            // ident ':=' expression
            TokenKind::Ident => {
                self.consume();
                self.expect(TokenKind::Becomes, ParseError::BecomesExpected)?;
                self.expression()
            }
            // 'call' ident
            TokenKind::Call => {
                self.consume();
                self.expect(TokenKind::Ident, ParseError::CallIdentifierExpected)
            }
            // 'begin' statement { ';' statement } 'end'
            TokenKind::Begin => {
                self.consume();
                self.statement()?;
                while self.check(TokenKind::Semicolon) {
                    self.consume();
                    self.statement()?;
                }
                self.expect(TokenKind::End, ParseError::EndExpected)
            }
            // 'if' condition 'then' statement [ 'else' statement ]
            TokenKind::If => {
                self.consume();
                self.condition()?;
                self.expect(TokenKind::Then, ParseError::ThenExpected)?;
                self.statement()?;
                if self.check(TokenKind::Else) {
                    self.consume();
                    self.statement()?;
                }
                Ok(())
            }
            // 'while' condition 'do' statement
            TokenKind::While => {
                self.consume();
                self.condition()?;
                self.expect(TokenKind::Do, ParseError::DoExpected)?;
                self.statement()
            }
            // 'write' ident | 'read' ident
            TokenKind::Write | TokenKind::Read => {
                self.consume();
                self.expect(TokenKind::Ident, ParseError::IdentifierExpected)
            }
            // Empty statement
            _ => Ok(()),
        }
    }

    // condition := 'odd' expression | expression relop expression
    fn condition(&mut self) -> Result<()> {
        self.enter(NonTerminal::Condition);

        if self.check(TokenKind::Odd) {
            self.consume();
            return self.expression();
        }

        self.expression()?;
        self.relational_operator()?;
        self.expression()
    }

    fn relational_operator(&mut self) -> Result<()> {
        self.enter(NonTerminal::RelOp);

        if !self.cursor.kind().is_relational() {
            return Err(ParseError::RelationalOperatorExpected);
        }
        self.consume();
        Ok(())
    }

    // expression := [ '+' | '-' ] term { ( '+' | '-' ) term }
    fn expression(&mut self) -> Result<()> {
        self.enter(NonTerminal::Expression);

        if self.check_any(&[TokenKind::Plus, TokenKind::Minus]) {
            self.consume();
        }
        self.term()?;

        while self.check_any(&[TokenKind::Plus, TokenKind::Minus]) {
            self.consume();
            self.term()?;
        }

        Ok(())
    }

    // term := factor { ( '*' | '/' ) factor }
    fn term(&mut self) -> Result<()> {
        self.enter(NonTerminal::Term);

        self.factor()?;
        while self.check_any(&[TokenKind::Mult, TokenKind::Slash]) {
            self.consume();
            self.factor()?;
        }

        Ok(())
    }

    // factor := ident | number | '(' expression ')'
    fn factor(&mut self) -> Result<()> {
        self.enter(NonTerminal::Factor);

        match self.cursor.kind() {
            TokenKind::Ident | TokenKind::Number => {
                self.consume();
                Ok(())
            }
            TokenKind::LParen => {
                self.consume();
                self.expression()?;
                self.expect(TokenKind::RParen, ParseError::RightParenMissing)
            }
            _ => Err(ParseError::InvalidFactorStart),
        }
    }

    // Helper methods

    fn enter(&mut self, rule: NonTerminal) {
        self.trace.rule(rule);
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.kind() == kind
    }

    fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.cursor.kind())
    }

    /// Reports the current token and moves past it
    fn consume(&mut self) {
        self.trace.token(self.cursor.current());
        self.cursor.advance();
    }

    /// Consumes a token of the given type or fails with `err`
    fn expect(&mut self, kind: TokenKind, err: ParseError) -> Result<()> {
        if !self.check(kind) {
            return Err(err);
        }
        self.consume();
        Ok(())
    }

    /// Consumes an identifier and returns its name
    fn expect_identifier(&mut self, err: ParseError) -> Result<String> {
        if !self.check(TokenKind::Ident) {
            return Err(err);
        }
        let name = self.cursor.current().lexeme.clone();
        self.consume();
        Ok(name)
    }

    /// Consumes a number literal and returns its value.
    ///
    /// A number token whose lexeme does not fit an `i64` counts as a
    /// missing number.
    fn expect_number(&mut self) -> Result<i64> {
        if !self.check(TokenKind::Number) {
            return Err(ParseError::NumberExpected);
        }
        let value = self
            .cursor
            .current()
            .lexeme
            .parse()
            .map_err(|_| ParseError::NumberExpected)?;
        self.consume();
        Ok(value)
    }
}
