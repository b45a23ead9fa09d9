//! Binary smoke tests
//!
//! Network-touching commands are exercised elsewhere; these only check
//! that the binary parses its command line and reports configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocketbook() -> Command {
    Command::cargo_bin("pocketbook").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    pocketbook()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("budget")
                .and(predicate::str::contains("invest"))
                .and(predicate::str::contains("portfolio")),
        );
}

#[test]
fn test_unknown_subcommand_fails() {
    pocketbook().arg("frobnicate").assert().failure();
}

#[test]
fn test_config_shows_paths_and_service_url() {
    let temp_dir = TempDir::new().unwrap();

    pocketbook()
        .env("POCKETBOOK_CLI_DATA_DIR", temp_dir.path())
        .arg("--service-url")
        .arg("http://budget.local:8080")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("http://budget.local:8080")
                .and(predicate::str::contains("config.json")),
        );
}

#[test]
fn test_config_set_income_persists() {
    let temp_dir = TempDir::new().unwrap();

    pocketbook()
        .env("POCKETBOOK_CLI_DATA_DIR", temp_dir.path())
        .args(["config", "set-income", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1200.00"));

    pocketbook()
        .env("POCKETBOOK_CLI_DATA_DIR", temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1200.00"));
}

#[test]
fn test_budget_add_rejects_bad_amount() {
    let temp_dir = TempDir::new().unwrap();

    pocketbook()
        .env("POCKETBOOK_CLI_DATA_DIR", temp_dir.path())
        .args(["budget", "add", "Rent", "Apartment", "not-money", "1 month"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}
