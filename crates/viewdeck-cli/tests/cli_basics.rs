//! Basic command surface checks.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn viewdeck() -> Command {
    Command::cargo_bin("viewdeck").expect("binary built")
}

#[test]
fn help_lists_subcommands() {
    viewdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn classify_plain_output_names_the_category() {
    viewdeck()
        .args(["classify", "Awaiting Approval"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Awaiting Approval"))
        .stdout(predicate::str::contains("orange"));
}

#[test]
fn unknown_subcommand_fails() {
    viewdeck()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
