//! Binary-level CLI tests: usage path, help, argument validation

use predicates::prelude::*;

#[test]
fn test_no_args_prints_usage_and_exits_zero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pagebench");
    cmd.assert().success().stdout(predicate::str::contains(
        "Usage: sudo PAGEBENCH_POOL_SIZE=N pagebench JSON_SAMPLE_PATH NUMBER_OF_READS",
    ));
}

#[test]
fn test_single_arg_prints_usage_and_exits_zero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pagebench");
    cmd.arg("sample.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pagebench");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_non_numeric_read_count_fails_fast() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pagebench");
    cmd.arg("sample.json").arg("lots").assert().failure();
}
