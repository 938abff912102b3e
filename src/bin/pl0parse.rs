use std::fs;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pl0parse::lexer::token_list;
use pl0parse::{report, ParseOptions, TokenListFormat};
use tracing_subscriber::EnvFilter;

/// Exit status for unreadable input, undecodable token lists and report
/// write failures
const EXIT_IO: u8 = 64;

/// Encoding of the token list on the input side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Auto,
    Lexemes,
    Json,
}

impl From<Format> for TokenListFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Auto => TokenListFormat::Auto,
            Format::Lexemes => TokenListFormat::Lexemes,
            Format::Json => TokenListFormat::Json,
        }
    }
}

/// Syntax-check a PL/0 token list and print its parsing history.
#[derive(Parser)]
#[command(name = "pl0parse", version)]
struct Cli {
    /// Token list produced by the lexer (stdin when absent or `-`)
    file: Option<PathBuf>,

    /// Encoding of the token list
    #[arg(long, default_value = "auto", value_enum)]
    format: Format,

    /// Write the report to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Omit the `Parsing History` banner
    #[arg(long)]
    no_header: bool,

    /// Omit the symbol table dump after a successful parse
    #[arg(long)]
    no_symbols: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_IO)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let input = read_input(cli.file.as_deref())?;
    let tokens =
        token_list::decode(&input, cli.format.into()).context("invalid token list")?;

    let options = ParseOptions {
        history_header: !cli.no_header,
        symbol_table: !cli.no_symbols,
    };

    let outcome = match &cli.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            report(&tokens, BufWriter::new(file), &options)
        }
        None => report(&tokens, io::stdout().lock(), &options),
    }
    .context("failed to write the parsing report")?;

    match (outcome.symbols(), outcome.error()) {
        (Some(symbols), _) => tracing::debug!(symbols = symbols.len(), "parse succeeded"),
        (_, Some(err)) => tracing::debug!(code = err.code(), "parse failed: {}", err),
        _ => {}
    }
    Ok(outcome.code())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("cannot read stdin")?;
            Ok(input)
        }
    }
}
