use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command with HOME pointed at an empty dir so no user config leaks in
fn bkrs(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", home.path())
        .arg("--dictionary")
        .arg(fixture_path("dictionary.json"));
    cmd
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chinese dictionary lookup"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bkrs"));
}

#[test]
fn test_cli_prints_found_word() {
    let home = TempDir::new().unwrap();

    bkrs(&home)
        .args(["--delay-ms", "10"])
        .write_stdin("你好\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("你好\nnǐ hǎo\nздравствуйте\n"));
}

#[test]
fn test_cli_unescapes_translation_newlines() {
    let home = TempDir::new().unwrap();

    bkrs(&home)
        .args(["--delay-ms", "10"])
        .write_stdin("  好  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) хороший\n2) ладно"));
}

#[test]
fn test_cli_reports_missing_word() {
    let home = TempDir::new().unwrap();

    bkrs(&home)
        .args(["--delay-ms", "10"])
        .write_stdin("他们\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Word '他们' not found"));
}

#[test]
fn test_cli_burst_only_answers_last_line() {
    let home = TempDir::new().unwrap();

    bkrs(&home)
        .args(["--delay-ms", "300"])
        .write_stdin("你\n你好\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("здравствуйте"))
        .stdout(predicate::str::contains("ты").not());
}

#[test]
fn test_cli_quit_cancels_pending_search() {
    let home = TempDir::new().unwrap();

    bkrs(&home)
        .args(["--delay-ms", "5000"])
        .write_stdin("你好\nquit\n")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("здравствуйте").not());
}

#[test]
fn test_cli_with_invalid_dictionary() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg("--dictionary")
        .arg(fixture_path("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dictionary"));
}

#[test]
fn test_cli_with_nonexistent_dictionary() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg("--dictionary")
        .arg("nonexistent.json")
        .assert()
        .failure();
}

#[test]
fn test_fixture_dictionary_is_valid_json() {
    let content = std::fs::read_to_string(fixture_path("dictionary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(3));
}
