//! lira-drv - Interpreter Driver
//!
//! ============================================================================
//! DRIVER OVERVIEW
//! ============================================================================
//!
//! The driver is the entry point and orchestrator for one interpreter
//! invocation. It is responsible for:
//!
//! 1. CONFIGURATION
//!    - a program path and a rate-table path (default `eurofxref.csv`)
//!
//! 2. FILE MANAGEMENT
//!    - read the rate table and the program source
//!    - file handles are released on every exit path
//!
//! 3. PIPELINE ORCHESTRATION
//!    - run the phases in order
//!    - stop at the first error from any phase
//!
//! 4. ERROR REPORTING
//!    - surface the error as its single
//!      `<Kind>: Ln <l> Col <c> : <message>` line
//!    - exit 0 on success, non-zero on any surfaced error
//!
//! ============================================================================
//! INTERPRETATION PIPELINE
//! ============================================================================
//!
//! ```text
//! rate table (csv)            program source
//!       |                           |
//!       v                           v
//! [rate analyser] --names--> [lexer with currency names]
//!       |                           |
//!     rates                     [parser] --> AST
//!       |                           |
//!       +---------> [interpreter] <-+
//! ```
//!
//! PHASES DETAIL:
//! --------------
//!
//! Phase 1: Rate analysis
//! - Input: CSV-shaped rate table
//! - Output: currency-name list + name -> rate mapping
//! - Tool: lira-lex (two analyser passes over the same text)
//! - Errors: malformed table, name/rate count mismatch
//!
//! Phase 2: Lexical analysis
//! - Input: program source (text) + the discovered currency-name set
//! - Output: token stream, pulled on demand by the parser
//! - Tool: lira-lex
//! - Errors: unmatchable characters, unterminated strings, length bounds
//!
//! Phase 3: Parsing
//! - Input: token stream
//! - Output: Abstract Syntax Tree (AST)
//! - Tool: lira-par
//! - Errors: syntax errors, redefinitions, malformed transfer shapes
//!
//! Phase 4: Interpretation
//! - Input: AST + rate mapping
//! - Output: program side effects (console I/O)
//! - Tool: lira-run
//! - Errors: type mismatches, undeclared names, value-size overflow
//!
//! The currency-name discovery is deliberately two-phase: a lexer with an
//! empty currency set reads the CSV first, then the program lexer is built
//! with the discovered name set - the names come from a file parsed by the
//! same lexer that needs them.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use tracing::debug;

use lira_lex::{rates, Lexer};
use lira_par::Parser;
use lira_run::{Exchange, Interpreter};

/// The default rate-table path when none is given on the command line.
pub const DEFAULT_RATES_PATH: &str = "eurofxref.csv";

/// One interpreter invocation: a program and its rate table.
#[derive(Debug, Clone)]
pub struct Config {
    /// The program to run.
    pub program_path: PathBuf,
    /// The exchange-rate table to load.
    pub rates_path: PathBuf,
}

impl Config {
    pub fn new(program_path: PathBuf, rates_path: Option<PathBuf>) -> Self {
        Self {
            program_path,
            rates_path: rates_path.unwrap_or_else(|| PathBuf::from(DEFAULT_RATES_PATH)),
        }
    }
}

/// Runs the whole pipeline for one configuration.
pub fn run(config: &Config) -> Result<()> {
    let rates_text = fs::read_to_string(&config.rates_path).with_context(|| {
        format!(
            "cannot read exchange rate file '{}'",
            config.rates_path.display()
        )
    })?;

    let currency_names = rates::currency_types(&rates_text)?;
    let exchange_rates = rates::exchange_rates(&rates_text)?;
    debug!(
        currencies = currency_names.len(),
        "exchange rate table loaded"
    );

    let source = fs::read_to_string(&config.program_path).with_context(|| {
        format!(
            "cannot read program file '{}'",
            config.program_path.display()
        )
    })?;

    let currencies: FxHashSet<String> = currency_names.into_iter().collect();
    let lexer = Lexer::new(&source).with_currencies(currencies);
    let mut parser = Parser::new(lexer)?;
    let program = parser.parse()?;
    debug!(functions = program.functions.len(), "program parsed");

    let mut interpreter = Interpreter::new(Exchange::new(exchange_rates));
    debug!("interpretation started");
    interpreter.run(&program)?;

    Ok(())
}
