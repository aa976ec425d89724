//! Repeated-command (loop) detection.

use std::collections::HashMap;

use tracing::debug;

use crate::core::extract::Command;
use crate::core::normalize::comparison_key;
use crate::core::types::FailureRecord;

/// A normalized command seen at least this many times is a loop.
pub const REPEAT_THRESHOLD: usize = 3;

/// Report every normalized command issued [`REPEAT_THRESHOLD`] or more times.
///
/// Counting ignores order; records come out in order of each command's first
/// appearance so output is deterministic.
pub fn detect(commands: &[Command]) -> Vec<FailureRecord> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for command in commands {
        let key = comparison_key(command);
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(key);
        }
        *count += 1;
    }

    let records: Vec<FailureRecord> = first_seen
        .iter()
        .filter_map(|key| {
            let count = counts.get(key).copied().unwrap_or(0);
            (count >= REPEAT_THRESHOLD).then(|| FailureRecord::repetition(key))
        })
        .collect();
    debug!(
        distinct = first_seen.len(),
        repeated = records.len(),
        "counted commands"
    );
    records
}
