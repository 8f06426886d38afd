//! End-to-end CLI tests against the snapshot fixtures in `tests/fixtures/`.
//!
//! Each fixture directory holds:
//! - `store.json`: artifacts, rules and mappings
//! - `expected.report.json`: the report the CLI should write (timestamps and version
//!   use placeholders)
//! - optionally `artifactflow.toml`
//!
//! Each test checks the exit code (0 pass, 2 fail, 1 runtime error) and the report.

use artifactflow_test_util::normalize_nondeterministic;
use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn artifactflow_cmd() -> Command {
    Command::cargo_bin("artifactflow").expect("artifactflow binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("artifactflow-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `validate` against a fixture and return the exit code and written report.
fn run_validate_on_fixture(fixture_name: &str, artifact: &str, environment: Option<&str>) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let mut cmd = artifactflow_cmd();
    cmd.arg("--config")
        .arg(fixture_path.join("artifactflow.toml"))
        .arg("validate")
        .arg("--store")
        .arg(fixture_path.join("store.json"))
        .arg("--artifact")
        .arg(artifact)
        .arg("--report-out")
        .arg(&report_path);
    if let Some(env) = environment {
        cmd.arg("--environment").arg(env);
    }

    let output = cmd.output().expect("Failed to run command");
    let exit_code = output.status.code().unwrap_or(-1);

    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");

    (exit_code, report)
}

fn load_expected_report(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&expected_path).expect("Failed to read expected report");
    serde_json::from_str(&content).expect("Failed to parse expected report")
}

fn assert_reports_match(actual: Value, expected: Value, fixture_name: &str) {
    let actual = normalize_nondeterministic(actual);
    let expected = normalize_nondeterministic(expected);

    assert_eq!(
        actual,
        expected,
        "Report mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap()
    );
}

#[test]
fn fixture_passing_exits_zero() {
    let (exit_code, report) = run_validate_on_fixture("passing", "payments-api", Some("production"));
    assert_eq!(exit_code, 0, "passing fixture should exit with 0");
    assert_reports_match(report, load_expected_report("passing"), "passing");
}

#[test]
fn fixture_failing_collects_every_violation() {
    let (exit_code, report) = run_validate_on_fixture("failing", "payments-api", Some("production"));
    assert_eq!(exit_code, 2, "failing fixture should exit with 2");
    assert_reports_match(report, load_expected_report("failing"), "failing");
}

#[test]
fn fixture_advisory_uses_config_profile_and_default_environment() {
    let (exit_code, report) = run_validate_on_fixture("advisory", "ledger-worker", None);
    assert_eq!(exit_code, 0, "advisory failures should not fail under lenient");
    assert_reports_match(report, load_expected_report("advisory"), "advisory");
}

#[test]
fn fixture_missing_artifact_writes_error_report() {
    let (exit_code, report) = run_validate_on_fixture("missing_artifact", "ghost", Some("production"));
    assert_eq!(exit_code, 1, "runtime errors exit with 1");
    assert_reports_match(
        report,
        load_expected_report("missing_artifact"),
        "missing_artifact",
    );
}

#[test]
fn same_fixture_twice_gives_the_same_report() {
    let (_, first) = run_validate_on_fixture("failing", "payments-api", Some("production"));
    let (_, second) = run_validate_on_fixture("failing", "payments-api", Some("production"));
    assert_eq!(
        normalize_nondeterministic(first),
        normalize_nondeterministic(second)
    );
}
