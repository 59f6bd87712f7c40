//! The `lira` binary: run a lira program against an exchange-rate table.
//!
//! Usage: `lira <program> [rates]`. The rate table defaults to
//! `eurofxref.csv`. Exit code 0 on success; any surfaced error is printed
//! as a single line and the process exits non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lira_drv::{run, Config, DEFAULT_RATES_PATH};

/// Tree-walking interpreter for the lira language.
#[derive(Parser, Debug)]
#[command(name = "lira")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run a lira program against an exchange-rate table")]
struct Cli {
    /// Path to the program to run
    program: PathBuf,

    /// Path to the exchange-rate table
    #[arg(default_value = DEFAULT_RATES_PATH)]
    rates: PathBuf,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let config = Config::new(cli.program, Some(cli.rates));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logging goes to stderr and stays quiet unless `LIRA_LOG` says
/// otherwise, so program output is untouched.
fn init_logging() {
    let filter = EnvFilter::try_from_env("LIRA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
