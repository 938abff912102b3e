//! Declaration record built while parsing
//!
//! The table is append-only: every `const`, `var` and `procedure` declaration
//! lands here in source order, tagged with the nesting level it was declared
//! at. Names are never resolved against it and duplicates are kept.

use std::fmt;

/// What a declared name stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Constant,
    Variable,
    Procedure,
}

impl SymbolKind {
    /// Short name used in the table dump
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Constant => "const",
            SymbolKind::Variable => "var",
            SymbolKind::Procedure => "procedure",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One declared entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Identifier text
    pub name: String,
    /// Constant, variable or procedure
    pub kind: SymbolKind,
    /// Nesting depth of the declaration (0 = outermost block)
    pub level: u32,
    /// Declared value; only constants carry one
    pub value: Option<i64>,
}

impl Symbol {
    pub fn constant(name: impl Into<String>, level: u32, value: i64) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Constant,
            level,
            value: Some(value),
        }
    }

    pub fn variable(name: impl Into<String>, level: u32) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Variable,
            level,
            value: None,
        }
    }

    pub fn procedure(name: impl Into<String>, level: u32) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Procedure,
            level,
            value: None,
        }
    }
}

/// Insertion-ordered symbol table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a symbol; never rejects
    pub fn insert(&mut self, symbol: Symbol) {
        tracing::trace!(
            name = %symbol.name,
            kind = %symbol.kind,
            level = symbol.level,
            "declared symbol"
        );
        self.symbols.push(symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl IntoIterator for SymbolTable {
    type Item = Symbol;
    type IntoIter = std::vec::IntoIter<Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.into_iter()
    }
}

/// Fixed-width dump, one line per symbol:
///
/// ```text
/// Symbol Table
/// ============
/// Name        Kind       Level  Value
/// a           const      0      5
/// x           var        0
/// ```
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Symbol Table")?;
        writeln!(f, "============")?;
        writeln!(f, "{:<11} {:<10} {:<6} Value", "Name", "Kind", "Level")?;
        for symbol in &self.symbols {
            let value = symbol.value.map(|v| v.to_string()).unwrap_or_default();
            let line = format!(
                "{:<11} {:<10} {:<6} {}",
                symbol.name, symbol.kind, symbol.level, value
            );
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
