//! Text report for one parse: history banner, trace, outcome line and
//! symbol table dump.
//!
//! ```text
//! Parsing History
//! ===============
//! NONTERM: PROGRAM
//! NONTERM: BLOCK
//! NONTERM: STATEMENT
//! TOKEN  : <periodsym, '.'>
//!
//! PARSING WAS SUCCESSFUL.
//! ```
//!
//! A failed parse ends with `PARSING ERROR[<code>]: <message>.` instead and
//! never prints the table.

use std::io::Write;

use crate::error::{ParseError, Result};
use crate::lexer::Token;
use crate::parser::{parse_program, WriterTrace};
use crate::symbol_table::SymbolTable;

/// Report settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Print the `Parsing History` banner before the trace
    pub history_header: bool,
    /// Dump the symbol table after a successful parse
    pub symbol_table: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            history_header: true,
            symbol_table: true,
        }
    }
}

/// Outcome of one parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    result: std::result::Result<SymbolTable, ParseError>,
}

impl ParseOutcome {
    /// `0` on success, the violation code otherwise
    pub fn code(&self) -> u8 {
        match &self.result {
            Ok(_) => 0,
            Err(err) => err.code(),
        }
    }

    /// Declarations of a successful parse
    pub fn symbols(&self) -> Option<&SymbolTable> {
        self.result.as_ref().ok()
    }

    /// Violation that stopped a failed parse
    pub fn error(&self) -> Option<ParseError> {
        self.result.as_ref().err().copied()
    }
}

impl From<std::result::Result<SymbolTable, ParseError>> for ParseOutcome {
    fn from(result: std::result::Result<SymbolTable, ParseError>) -> Self {
        ParseOutcome { result }
    }
}

/// Parses `tokens` and writes the full report to `out`.
///
/// Grammar violations are part of the outcome; only a failure to write the
/// report is returned as an error.
pub fn report<W: Write>(
    tokens: &[Token],
    out: W,
    options: &ParseOptions,
) -> Result<ParseOutcome> {
    let mut trace = WriterTrace::new(out);
    let outcome = run(tokens, &mut trace, options);
    trace.finish()?;
    Ok(outcome)
}

/// Parses `tokens`, writes the default report to `out` and returns the
/// outcome code: `0` for success, `1..=14` for a grammar violation.
///
/// Write failures are logged and do not change the code.
pub fn parse<W: Write>(tokens: &[Token], out: W) -> i32 {
    let mut trace = WriterTrace::new(out);
    let outcome = run(tokens, &mut trace, &ParseOptions::default());
    if let Err(err) = trace.finish() {
        tracing::warn!(error = %err, "parsing report could not be written");
    }
    i32::from(outcome.code())
}

fn run<W: Write>(
    tokens: &[Token],
    trace: &mut WriterTrace<W>,
    options: &ParseOptions,
) -> ParseOutcome {
    if options.history_header {
        trace.line("Parsing History");
        trace.line("===============");
    }

    let outcome = ParseOutcome::from(parse_program(tokens, &mut *trace));

    trace.line("");
    match &outcome.result {
        Ok(symbols) => {
            trace.line("PARSING WAS SUCCESSFUL.");
            if options.symbol_table {
                trace.line("");
                trace.line("");
                trace.line(symbols.to_string().trim_end_matches('\n'));
            }
        }
        Err(err) => {
            trace.line(&format!("PARSING ERROR[{}]: {}.", err.code(), err));
        }
    }

    outcome
}
