//! Command normalization for repetition counting.

use std::sync::LazyLock;

use regex::Regex;

/// ` <<<` and everything after it, across lines.
static HEREDOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s) <<<.*").expect("heredoc pattern should be valid"));

/// Strip a trailing heredoc payload so commands that differ only in their
/// inline input compare equal.
pub fn normalize(command: &str) -> String {
    HEREDOC_RE.replace(command, "").into_owned()
}

/// Key used when counting repeated commands: normalized, then trimmed.
pub fn comparison_key(command: &str) -> String {
    normalize(command).trim().to_string()
}
