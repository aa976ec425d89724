//! CLI tests for `analyzer analyze` and `analyzer extract`.
//!
//! Spawns the analyzer binary against logs written to a temp directory and
//! verifies exit codes and report contents.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use analyzer::exit_codes;
use analyzer::test_support::mixed_log_json;

fn analyzer(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_analyzer"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run analyzer")
}

fn write_mixed_log(dir: &Path) {
    fs::write(dir.join("agent_data.json"), mixed_log_json().to_string()).expect("write log");
}

#[test]
fn mixed_log_reports_three_failures_in_category_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_mixed_log(temp.path());

    let output = analyzer(temp.path(), &["analyze", "agent_data.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let types: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Failure Type: "))
        .collect();
    assert_eq!(types, vec!["Execution", "Strategic", "Loop"]);
    assert!(stdout.contains("Failure Command: python solve.py\n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("analyze: failures=3 execution=1 strategic=1 loop=1"));
}

#[test]
fn json_report_written_to_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_mixed_log(temp.path());

    let output = analyzer(
        temp.path(),
        &[
            "analyze",
            "agent_data.json",
            "--format",
            "json",
            "--output",
            "out/report.json",
        ],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stdout.is_empty());

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(temp.path().join("out/report.json")).expect("read report"),
    )
    .expect("parse report");
    let kinds: Vec<&str> = report
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|item| item["kind"].as_str())
        .collect();
    assert_eq!(kinds, vec!["execution", "strategic", "loop"]);
}

#[test]
fn log_sink_emits_one_warning_per_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_mixed_log(temp.path());

    let output = analyzer(temp.path(), &["analyze", "agent_data.json", "--log-sink"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("failure detected").count(), 3);
    assert!(stderr.contains("analyze: failures=3"));
}

#[test]
fn clean_log_succeeds_with_empty_report() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("clean.json"),
        serde_json::json!({
            "steps": [{
                "model_response": {"value": "Task completed successfully"},
                "commands": ["ls"],
            }],
        })
        .to_string(),
    )
    .expect("write log");

    let output = analyzer(temp.path(), &["analyze", "clean.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stdout.is_empty());
}

#[test]
fn scalar_log_has_no_failures() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("scalar.json"), "42").expect("write log");

    let output = analyzer(temp.path(), &["analyze", "scalar.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stderr).contains("analyze: failures=0"));
}

#[test]
fn unparseable_log_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("broken.json"), "{not json").expect("write log");

    let output = analyzer(temp.path(), &["analyze", "broken.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("parse broken.json"));
}

#[test]
fn missing_log_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = analyzer(temp.path(), &["analyze", "missing.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn suggest_without_configured_command_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_mixed_log(temp.path());

    let output = analyzer(temp.path(), &["analyze", "agent_data.json", "--suggest"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("remediation.command"));
}

#[test]
fn suggest_uses_configured_command() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_mixed_log(temp.path());
    fs::write(
        temp.path().join("analyzer.toml"),
        "[remediation]\n\
         command = [\"sh\", \"-c\", \"cat >/dev/null; echo 'cat input.txt'\"]\n\
         timeout_secs = 10\n",
    )
    .expect("write config");

    let output = analyzer(temp.path(), &["analyze", "agent_data.json", "--suggest"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Suggested Next Command: cat input.txt").count(), 3);
}

#[test]
fn extract_lists_commands() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_mixed_log(temp.path());

    let output = analyzer(temp.path(), &["extract", "agent_data.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse extract output");
    assert_eq!(summary["responses"], 3);
    assert_eq!(summary["commands"].as_array().map(Vec::len), Some(6));
}
