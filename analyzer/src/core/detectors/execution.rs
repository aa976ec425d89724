//! Syntax and runtime error detection over model responses.

use tracing::debug;

use crate::core::detectors::first_indicator;
use crate::core::extract::ModelResponse;
use crate::core::types::FailureRecord;

/// Error markers, matched case-insensitively.
pub const ERROR_INDICATORS: &[&str] = &[
    "syntaxerror",
    "unexpected token",
    "invalid syntax",
    "unterminated string",
    "missing parentheses",
    "unexpected eof",
];

/// Flag a response whose text reports a syntax or runtime error.
pub fn detect(response: &ModelResponse) -> Option<FailureRecord> {
    let text = response.text()?;
    let indicator = first_indicator(text, ERROR_INDICATORS)?;
    debug!(indicator, "execution indicator matched");
    Some(FailureRecord::execution(text))
}
