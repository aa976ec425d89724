//! Analyzer configuration stored in `analyzer.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "analyzer.toml";

/// Analyzer configuration (TOML).
///
/// Missing fields default to sensible values; a missing file is the same as
/// an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub report: ReportConfig,
    pub remediation: RemediationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

/// How failure records are rendered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One human-readable block per failure.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RemediationConfig {
    /// Command that reads a prompt on stdin and prints a suggested next
    /// command (e.g. `["codex","exec","-"]`). Empty disables suggestions.
    pub command: Vec<String>,

    /// Per-suggestion wall-clock budget in seconds.
    pub timeout_secs: u64,

    /// Truncate suggestion stdout/stderr beyond this many bytes.
    pub output_limit_bytes: usize,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            command: Vec::new(),
            timeout_secs: 60,
            output_limit_bytes: 16_384,
        }
    }
}

impl RemediationConfig {
    pub fn is_enabled(&self) -> bool {
        !self.command.is_empty()
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        let remediation = &self.remediation;
        if remediation.timeout_secs == 0 {
            return Err(anyhow!("remediation.timeout_secs must be > 0"));
        }
        if remediation.output_limit_bytes == 0 {
            return Err(anyhow!("remediation.output_limit_bytes must be > 0"));
        }
        if remediation.is_enabled() && remediation.command[0].trim().is_empty() {
            return Err(anyhow!("remediation.command must start with a program name"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AnalyzerConfig::default()`.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    if !path.exists() {
        let cfg = AnalyzerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AnalyzerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
