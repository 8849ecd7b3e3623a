mod errors;
mod history;

use assert_cmd::Command;
use lector::PKG_VERSION;
use predicates::prelude::*;

/// A `lector` command that does not see the caller's `LECTOR_*` variables
pub fn lector() -> Command {
    let mut cmd = Command::cargo_bin("lector").unwrap();
    for key in [
        "LECTOR_ENDPOINT",
        "LECTOR_ACCESS_TOKEN",
        "LECTOR_LOG",
        "LECTOR_TIMEOUT_SECS",
        "LECTOR_RETRIES",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn its_executable() {
    let mut cmd = lector();

    // running the CLI with no command returns to std err
    let result = cmd.assert().failure();
    result.stderr(predicate::str::contains("Usage"));
}

#[test]
fn it_prints_its_version() {
    let mut cmd = lector();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(PKG_VERSION));
}

#[test]
fn it_has_a_history_list_command() {
    let mut cmd = lector();
    cmd.args(["history", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-pages"));
}
