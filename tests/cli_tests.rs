//! CLI interface tests
//!
//! Tests basic CLI functionality like --help, --version flags

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::fixtures;

/// Helper to get the seo-audit binary command
fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seo-audit"))
}

#[test]
fn test_cli_help_flag_displays_usage_information() {
    let mut cmd = get_bin();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Heuristic SEO analyzer for static HTML pages",
        ));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    let mut cmd = get_bin();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seo-audit"));
}

#[test]
fn test_cli_no_subcommand_shows_usage_summary() {
    let mut cmd = get_bin();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: seo-audit <COMMAND>"));
}

#[test]
fn test_audit_json_output_is_parseable_json() {
    let (temp_dir, page) = fixtures::create_page("index.html", fixtures::WELL_OPTIMIZED_PAGE)
        .expect("Failed to create test fixture");

    let output = get_bin()
        .arg("audit")
        .arg(page.to_str().expect("page path is UTF-8"))
        .arg("--json")
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Failed to parse stdout as UTF-8");
    let parse_result = serde_json::from_str::<serde_json::Value>(&stdout);
    assert!(
        parse_result.is_ok(),
        "JSON output should be valid JSON, got: {}",
        stdout
    );
}

#[test]
fn test_audit_missing_page_fails_with_noinput_exit_code() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = get_bin();
    cmd.arg("audit")
        .arg("does-not-exist.html")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(66)
        .stderr(predicate::str::contains("Page not found"));
}

#[test]
fn test_audit_unknown_url_scheme_fails_with_usage_exit_code() {
    let mut cmd = get_bin();
    cmd.arg("audit")
        .arg("ftp://example.com")
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("Invalid audit target"));
}

#[test]
fn test_audit_error_output_includes_help_suggestion() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = get_bin();
    cmd.arg("audit")
        .arg("missing.html")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_site_empty_directory_fails_with_noinput_exit_code() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = get_bin();
    cmd.arg("site")
        .arg(temp_dir.path().to_str().expect("dir path is UTF-8"))
        .assert()
        .failure()
        .code(66)
        .stderr(predicate::str::contains("No HTML pages found"));
}

#[test]
fn test_completions_bash_generates_script() {
    let mut cmd = get_bin();
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("seo-audit"));
}
