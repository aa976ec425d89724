//! Detector orchestration over an extracted log.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::detectors::{execution, repetition, strategic};
use crate::core::extract::{Extraction, extract};
use crate::core::record::LogRecord;
use crate::core::types::{FailureKind, FailureRecord};

/// Extract `root` once and run every detector over it.
pub fn analyze(root: &LogRecord) -> Vec<FailureRecord> {
    analyze_extraction(&extract(root))
}

/// Run every detector over an existing extraction.
///
/// Results are grouped by detector, not by log position: execution failures,
/// then strategic, then loop. Detectors do not see each other's results, so
/// one response may produce both an execution and a strategic record.
pub fn analyze_extraction(extraction: &Extraction) -> Vec<FailureRecord> {
    let mut failures: Vec<FailureRecord> = extraction
        .responses
        .iter()
        .filter_map(execution::detect)
        .collect();
    let execution_count = failures.len();

    failures.extend(extraction.responses.iter().filter_map(strategic::detect));
    let strategic_count = failures.len() - execution_count;

    let loops = repetition::detect(&extraction.commands);
    debug!(
        execution = execution_count,
        strategic = strategic_count,
        loops = loops.len(),
        "detectors finished"
    );
    failures.extend(loops);
    failures
}

/// Failure counts per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub by_kind: BTreeMap<FailureKind, usize>,
}

impl Summary {
    pub fn from_failures(failures: &[FailureRecord]) -> Self {
        let mut summary = Summary::default();
        for failure in failures {
            summary.total += 1;
            *summary.by_kind.entry(failure.kind()).or_insert(0) += 1;
        }
        summary
    }

    pub fn count(&self, kind: FailureKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}
