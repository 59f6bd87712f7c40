//! CLI interface e2e tests: usage line, version, argument arity.

use assert_cmd::Command;
use predicates::prelude::*;

fn lira() -> Command {
    Command::cargo_bin("lira").expect("lira binary not built")
}

#[test]
fn help_shows_usage() {
    lira()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("lira"));
}

#[test]
fn version_flag() {
    lira()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lira"));
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    lira()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn too_many_arguments_fail() {
    lira()
        .args(["a.lira", "rates.csv", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
