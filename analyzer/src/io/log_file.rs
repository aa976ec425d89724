//! Loading agent logs from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::core::record::LogRecord;

/// Read and parse the log at `path`.
///
/// Any read or parse failure is fatal for the run; the error names the path.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_log(path: &Path) -> Result<LogRecord> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    debug!(bytes = contents.len(), "read log file");
    parse_log(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Parse a JSON document into a log tree. Any JSON root is accepted.
pub fn parse_log(contents: &str) -> Result<LogRecord> {
    let value: Value = serde_json::from_str(contents).context("parse log json")?;
    Ok(LogRecord::from(value))
}
