//! Orchestration for the `analyze` and `extract` commands.
//!
//! Ties the pure core (extraction, detectors) to the I/O collaborators
//! (log loading, response archive, remediation, reporting).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, instrument};

use crate::core::extract::{Command, extract};
use crate::core::pipeline::{Summary, analyze_extraction};
use crate::core::types::FailureRecord;
use crate::io::config::ReportFormat;
use crate::io::log_file::load_log;
use crate::io::remediation::{Remediator, suggest_all};
use crate::io::report::{Sink, entries, write_report};
use crate::io::response_dump::append_responses;

/// Inputs for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub log_path: PathBuf,
    pub format: ReportFormat,
    pub sink: Sink,
    /// Append every extracted model response to this file.
    pub dump_responses: Option<PathBuf>,
}

/// Result of one analysis run, after the report has been written.
#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub failures: Vec<FailureRecord>,
    /// `None` when no remediator was supplied.
    pub suggestions: Option<Vec<Option<String>>>,
    pub summary: Summary,
}

/// Load, analyze, and report one log.
///
/// Finding failures is not an error; only unreadable input or an unwritable
/// sink fails the run.
#[instrument(skip_all, fields(log = %options.log_path.display()))]
pub fn run_analyze(
    options: &AnalyzeOptions,
    remediator: Option<&dyn Remediator>,
) -> Result<AnalyzeOutcome> {
    info!("analysis started");
    let root = load_log(&options.log_path)?;
    let extraction = extract(&root);

    if let Some(path) = &options.dump_responses {
        append_responses(path, &extraction.responses).context("dump model responses")?;
    }

    let failures = analyze_extraction(&extraction);
    let suggestions = remediator.map(|remediator| suggest_all(remediator, &failures));
    write_report(
        &options.sink,
        options.format,
        &entries(&failures, suggestions.as_deref()),
    )
    .context("write report")?;

    let summary = Summary::from_failures(&failures);
    info!(failures = summary.total, "analysis finished");
    Ok(AnalyzeOutcome {
        failures,
        suggestions,
        summary,
    })
}

/// What the extractor found in a log, for inspection.
#[derive(Debug, Serialize)]
pub struct ExtractSummary {
    pub responses: usize,
    pub commands: Vec<Command>,
}

pub fn run_extract(log_path: &Path) -> Result<ExtractSummary> {
    let root = load_log(log_path)?;
    let extraction = extract(&root);
    Ok(ExtractSummary {
        responses: extraction.responses.len(),
        commands: extraction.commands,
    })
}
