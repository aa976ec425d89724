//! Strategic confusion detection over model responses.

use tracing::debug;

use crate::core::detectors::first_indicator;
use crate::core::extract::ModelResponse;
use crate::core::types::FailureRecord;

/// Phrases that signal the agent is confused or giving up.
pub const CONFUSION_INDICATORS: &[&str] = &[
    "i apologize",
    "cannot",
    "unable to",
    "error",
    "failed",
    "doesn't work",
    "incorrect",
];

/// Flag a response whose text contains any confusion phrase.
pub fn detect(response: &ModelResponse) -> Option<FailureRecord> {
    let text = response.text()?;
    let indicator = first_indicator(text, CONFUSION_INDICATORS)?;
    debug!(indicator, "strategic indicator matched");
    Some(FailureRecord::strategic(text))
}
