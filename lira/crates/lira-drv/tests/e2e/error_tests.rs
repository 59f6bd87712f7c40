//! Error-path e2e tests: each error kind prints its single line and the
//! process exits non-zero.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::fixtures::{lira_run, write_program};

#[test]
fn lexical_error() {
    let dir = TempDir::new().unwrap();
    lira_run(&dir, "void main(){ int a = 1 $ 2; }")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("LexicalError: Ln 1 Col 24 :"));
}

#[test]
fn syntax_error() {
    let dir = TempDir::new().unwrap();
    lira_run(&dir, "void main(){ a; }")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "SyntaxError: Ln 1 Col 14 : expected assignment after identifier",
        ));
}

#[test]
fn semantic_error() {
    let dir = TempDir::new().unwrap();
    lira_run(&dir, "void main(){ print(ghost); }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SemanticError:"))
        .stderr(predicate::str::contains("'ghost' was not declared"));
}

#[test]
fn missing_main() {
    let dir = TempDir::new().unwrap();
    lira_run(&dir, "void helper(){ }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing main function"));
}

#[test]
fn missing_rate_table() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir, "void main(){ }");
    let mut cmd = assert_cmd::Command::cargo_bin("lira").unwrap();
    cmd.arg(program).arg(dir.path().join("absent.csv"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read exchange rate file"));
}

#[test]
fn malformed_rate_table() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir, "void main(){ }");
    let rates = dir.path().join("bad.csv");
    std::fs::write(&rates, "USD PLN,\n1.1,\n").unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("lira").unwrap();
    cmd.arg(program).arg(rates);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing comma"));
}

#[test]
fn unknown_currency_name_is_a_plain_identifier() {
    // GBP is not in the table, so `10 GBP` is an int followed by an
    // identifier and the parser rejects the bare identifier.
    let dir = TempDir::new().unwrap();
    lira_run(&dir, "void main(){ cur a = 10 GBP; }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SyntaxError:"));
}

#[test]
fn error_output_is_a_single_line() {
    let dir = TempDir::new().unwrap();
    let output = lira_run(&dir, "void main(){ print(ghost); }")
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "expected one error line, got: {stderr}");
}

#[test]
fn failing_program_still_flushes_prior_output() {
    let dir = TempDir::new().unwrap();
    let source = r#"void main(){ print("before"); print(ghost); }"#;
    lira_run(&dir, source)
        .assert()
        .failure()
        .stdout(predicate::str::contains("before"));
}

#[test]
fn rate_table_defaults_to_eurofxref() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir, r#"void main(){ print(1 USD); }"#);
    std::fs::write(dir.path().join("eurofxref.csv"), crate::fixtures::RATES).unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("lira").unwrap();
    cmd.current_dir(dir.path()).arg(program);
    cmd.assert().success().stdout("1.00 USD\n");
}

#[test]
fn default_rate_table_missing_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir, "void main(){ }");
    let mut cmd = assert_cmd::Command::cargo_bin("lira").unwrap();
    cmd.current_dir(dir.path()).arg(program);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("eurofxref.csv"));
}
