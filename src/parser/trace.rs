//! Parsing trace: the ordered record of consumed tokens and entered rules.
//!
//! The grammar only talks to the [`Trace`] trait. [`WriterTrace`] renders the
//! classic text history, [`TraceLog`] keeps events in memory and [`NoTrace`]
//! drops them.

use std::fmt;
use std::io::{self, Write};

use crate::lexer::Token;

/// Grammar non-terminals, one per parsing routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Program,
    Block,
    ConstDeclaration,
    VarDeclaration,
    ProcDeclaration,
    Statement,
    Condition,
    RelOp,
    Expression,
    Term,
    Factor,
}

impl NonTerminal {
    /// Name printed in the trace
    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::Program => "PROGRAM",
            NonTerminal::Block => "BLOCK",
            NonTerminal::ConstDeclaration => "CONST_DECLARATION",
            NonTerminal::VarDeclaration => "VAR_DECLARATION",
            NonTerminal::ProcDeclaration => "PROC_DECLARATION",
            NonTerminal::Statement => "STATEMENT",
            NonTerminal::Condition => "CONDITION",
            NonTerminal::RelOp => "REL_OP",
            NonTerminal::Expression => "EXPRESSION",
            NonTerminal::Term => "TERM",
            NonTerminal::Factor => "FACTOR",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Receiver of parsing events
pub trait Trace {
    /// A token was consumed
    fn token(&mut self, token: &Token);

    /// A grammar rule was entered
    fn rule(&mut self, rule: NonTerminal);
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn token(&mut self, token: &Token) {
        (**self).token(token)
    }

    fn rule(&mut self, rule: NonTerminal) {
        (**self).rule(rule)
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn token(&mut self, _token: &Token) {}

    fn rule(&mut self, _rule: NonTerminal) {}
}

/// One recorded parsing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Token(Token),
    Rule(NonTerminal),
}

/// In-memory event recorder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order they happened
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Consumed tokens, in order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Token(token) => Some(token),
            TraceEvent::Rule(_) => None,
        })
    }

    /// Entered rules, in order
    pub fn rules(&self) -> impl Iterator<Item = NonTerminal> + '_ {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Rule(rule) => Some(*rule),
            TraceEvent::Token(_) => None,
        })
    }
}

impl Trace for TraceLog {
    fn token(&mut self, token: &Token) {
        self.events.push(TraceEvent::Token(token.clone()));
    }

    fn rule(&mut self, rule: NonTerminal) {
        self.events.push(TraceEvent::Rule(rule));
    }
}

/// Renders the trace line for a consumed token: `TOKEN  : <identsym, 'x'>`
pub fn token_line(token: &Token) -> String {
    format!("{:>8} <{}, '{}'>", "TOKEN  :", token.kind.name(), token.lexeme)
}

/// Renders the trace line for an entered rule: `NONTERM: EXPRESSION`
pub fn rule_line(rule: NonTerminal) -> String {
    format!("{:>8} {}", "NONTERM:", rule.name())
}

/// Writes the text history to an output sink.
///
/// Write failures cannot travel back through the grammar, so the first one
/// is kept and every later write is skipped. [`WriterTrace::finish`] reports
/// it.
pub struct WriterTrace<W: Write> {
    out: W,
    failure: Option<io::Error>,
}

impl<W: Write> WriterTrace<W> {
    pub fn new(out: W) -> Self {
        WriterTrace { out, failure: None }
    }

    /// Writes one line of report text
    pub fn line(&mut self, text: &str) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", text) {
            self.failure = Some(err);
        }
    }

    /// Flushes the sink and hands it back, or returns the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Trace for WriterTrace<W> {
    fn token(&mut self, token: &Token) {
        self.line(&token_line(token));
    }

    fn rule(&mut self, rule: NonTerminal) {
        self.line(&rule_line(rule));
    }
}
