//! Optional remediation suggestions from an external service.
//!
//! The [`Remediator`] trait keeps the detection pipeline independent of any
//! particular model backend. [`CommandRemediator`] shells out to a configured
//! command; tests use fakes that never spawn processes.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument, warn};

use crate::core::types::FailureRecord;
use crate::io::config::RemediationConfig;
use crate::io::process::{ProcessLimits, run_with_input};
use crate::io::prompt::render_remediation;

/// Suggests the next command an agent should run after a failure.
pub trait Remediator {
    fn suggest(&self, failure: &FailureRecord) -> Result<String>;
}

/// Remediator that pipes a rendered prompt into an external command and
/// reads the suggestion from its stdout.
pub struct CommandRemediator {
    argv: Vec<String>,
    limits: ProcessLimits,
}

impl CommandRemediator {
    /// Build from config; `None` when no command is configured.
    pub fn from_config(config: &RemediationConfig) -> Option<Self> {
        if !config.is_enabled() {
            return None;
        }
        Some(Self {
            argv: config.command.clone(),
            limits: ProcessLimits {
                timeout: Duration::from_secs(config.timeout_secs),
                output_limit_bytes: config.output_limit_bytes,
            },
        })
    }
}

impl Remediator for CommandRemediator {
    #[instrument(skip_all, fields(kind = %failure.kind()))]
    fn suggest(&self, failure: &FailureRecord) -> Result<String> {
        let prompt = render_remediation(failure)?;
        let output = run_with_input(&self.argv, prompt.as_bytes(), self.limits)
            .context("run remediation command")?;

        if output.timed_out {
            return Err(anyhow!(
                "remediation command timed out after {:?}",
                self.limits.timeout
            ));
        }
        if !output.status.success() {
            return Err(anyhow!(
                "remediation command failed with status {:?}: {}",
                output.status.code(),
                output.stderr_lossy().trim()
            ));
        }
        first_line(&output.stdout_lossy())
            .ok_or_else(|| anyhow!("remediation command printed no suggestion"))
    }
}

/// Ask `remediator` about each failure, in order.
///
/// A failed suggestion is logged and recorded as `None`; it never aborts the run.
pub fn suggest_all<R: Remediator + ?Sized>(
    remediator: &R,
    failures: &[FailureRecord],
) -> Vec<Option<String>> {
    failures
        .iter()
        .map(|failure| match remediator.suggest(failure) {
            Ok(suggestion) => {
                debug!(kind = %failure.kind(), "received suggestion");
                Some(suggestion)
            }
            Err(err) => {
                warn!(kind = %failure.kind(), err = %format!("{err:#}"), "suggestion failed");
                None
            }
        })
        .collect()
}

fn first_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(ToString::to_string)
}
