//! Failure reporting to stdout, a file, or the structured log.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use crate::core::pipeline::Summary;
use crate::core::types::{FailureKind, FailureRecord};
use crate::io::config::ReportFormat;

const NOT_AVAILABLE: &str = "N/A";

/// Where a report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
    /// One `warn!` event per failure.
    Log,
}

/// A failure plus its optional remediation suggestion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportEntry<'a> {
    #[serde(flatten)]
    pub failure: &'a FailureRecord,
    pub suggestion: Option<&'a str>,
}

/// Pair failures with suggestions; a missing suggestion list means none were requested.
pub fn entries<'a>(
    failures: &'a [FailureRecord],
    suggestions: Option<&'a [Option<String>]>,
) -> Vec<ReportEntry<'a>> {
    failures
        .iter()
        .enumerate()
        .map(|(idx, failure)| ReportEntry {
            failure,
            suggestion: suggestions
                .and_then(|all| all.get(idx))
                .and_then(|suggestion| suggestion.as_deref()),
        })
        .collect()
}

/// Render entries in the requested format.
pub fn render(format: ReportFormat, entries: &[ReportEntry<'_>]) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(entries)),
        ReportFormat::Json => render_json(entries),
    }
}

/// One block per failure, separated by a blank line.
pub fn render_text(entries: &[ReportEntry<'_>]) -> String {
    let mut out = String::new();
    for entry in entries {
        let failure = entry.failure;
        out.push_str(&format!("Failure Type: {}\n", failure.kind()));
        out.push_str(&format!("Failure Message: {}\n", failure.message()));
        out.push_str(&format!(
            "Failure Command: {}\n",
            failure.command().unwrap_or(NOT_AVAILABLE)
        ));
        out.push_str(&format!("Failure Context: {}\n", context_text(failure)));
        if let Some(suggestion) = entry.suggestion {
            out.push_str(&format!("Suggested Next Command: {suggestion}\n"));
        }
        out.push('\n');
    }
    out
}

pub fn render_json(entries: &[ReportEntry<'_>]) -> Result<String> {
    let mut buf = serde_json::to_string_pretty(entries).context("serialize report")?;
    buf.push('\n');
    Ok(buf)
}

/// Write the report to `sink`.
pub fn write_report(sink: &Sink, format: ReportFormat, entries: &[ReportEntry<'_>]) -> Result<()> {
    match sink {
        Sink::Stdout => {
            let rendered = render(format, entries)?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("write report to stdout")?;
            stdout.flush().context("flush stdout")
        }
        Sink::File(path) => write_file(path, &render(format, entries)?),
        Sink::Log => {
            for entry in entries {
                log_entry(entry);
            }
            Ok(())
        }
    }
}

/// Single-line count summary, e.g. `analyze: failures=3 execution=1 strategic=1 loop=1`.
pub fn summary_line(summary: &Summary) -> String {
    let mut line = format!("analyze: failures={}", summary.total);
    for kind in FailureKind::ALL {
        let count = summary.count(kind);
        if count > 0 {
            line.push_str(&format!(" {}={count}", kind.as_str().to_lowercase()));
        }
    }
    line
}

fn log_entry(entry: &ReportEntry<'_>) {
    let failure = entry.failure;
    warn!(
        kind = %failure.kind(),
        detail = failure.message(),
        command = failure.command(),
        context = %context_text(failure),
        suggestion = entry.suggestion,
        "failure detected"
    );
}

fn context_text(failure: &FailureRecord) -> String {
    match failure.context() {
        Some(context) => serde_json::to_string(context).unwrap_or_else(|_| format!("{context:?}")),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> Vec<FailureRecord> {
        vec![
            FailureRecord::strategic("I cannot do that"),
            FailureRecord::repetition("ls"),
        ]
    }

    #[test]
    fn text_blocks_use_na_for_missing_fields() {
        let failures = sample();
        let text = render_text(&entries(&failures, None));
        let expected = "\
Failure Type: Strategic
Failure Message: Agent exhibited confusion
Failure Command: N/A
Failure Context: {\"response\":\"I cannot do that\"}

Failure Type: Loop
Failure Message: Agent used repetitive commands
Failure Command: ls
Failure Context: N/A

";
        assert_eq!(text, expected);
    }

    #[test]
    fn text_includes_suggestions_when_present() {
        let failures = sample();
        let suggestions = vec![None, Some("cat README.md".to_string())];
        let text = render_text(&entries(&failures, Some(suggestions.as_slice())));
        assert_eq!(text.matches("Suggested Next Command:").count(), 1);
        assert!(text.contains("Suggested Next Command: cat README.md\n"));
    }

    #[test]
    fn json_report_is_an_array_of_flat_objects() {
        let failures = sample();
        let rendered = render_json(&entries(&failures, None)).expect("json");
        let json: Value = serde_json::from_str(&rendered).expect("parse");
        let items = json.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["kind"], "strategic");
        assert_eq!(items[0]["command"], Value::Null);
        assert_eq!(items[1]["command"], "ls");
        assert_eq!(items[1]["suggestion"], Value::Null);
    }

    #[test]
    fn file_sink_writes_rendered_report() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("reports").join("failures.txt");
        let failures = sample();
        write_report(
            &Sink::File(path.clone()),
            ReportFormat::Text,
            &entries(&failures, None),
        )
        .expect("write");
        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.starts_with("Failure Type: Strategic"));
    }

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(render_text(&[]), "");
        assert_eq!(render_json(&[]).expect("json"), "[]\n");
    }

    #[test]
    fn summary_line_lists_non_zero_kinds() {
        let summary = Summary::from_failures(&sample());
        assert_eq!(summary_line(&summary), "analyze: failures=2 strategic=1 loop=1");
    }
}
