//! Shared helpers for the e2e tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// The rate table every e2e test runs against.
pub const RATES: &str = "USD,PLN,EUR,\n1.1,4.3,1.0,\n";

/// Writes the standard rate table into `dir`.
pub fn write_rates(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("rates.csv");
    fs::write(&path, RATES).expect("failed to write rate table");
    path
}

/// Writes a program source into `dir`.
pub fn write_program(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("program.lira");
    fs::write(&path, source).expect("failed to write program");
    path
}

/// A command running `source` against the standard rate table.
pub fn lira_run(dir: &TempDir, source: &str) -> Command {
    let program = write_program(dir, source);
    let rates = write_rates(dir);
    let mut cmd = Command::cargo_bin("lira").expect("lira binary not built");
    cmd.arg(program).arg(rates);
    cmd
}
