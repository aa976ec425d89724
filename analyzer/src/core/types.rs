//! Failure classification types shared by detectors and reporters.
//!
//! Records are immutable once built. Absence of a failure is represented by
//! not producing a record, never by a record without a kind.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a detected failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Execution,
    /// Confusion or poor planning in the agent's own words.
    Strategic,
    Loop,
    Syntax,
    Timeout,
    Access,
    Unknown,
}

impl FailureKind {
    pub const ALL: [FailureKind; 7] = [
        FailureKind::Execution,
        FailureKind::Strategic,
        FailureKind::Loop,
        FailureKind::Syntax,
        FailureKind::Timeout,
        FailureKind::Access,
        FailureKind::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Execution => "Execution",
            FailureKind::Strategic => "Strategic",
            FailureKind::Loop => "Loop",
            FailureKind::Syntax => "Syntax",
            FailureKind::Timeout => "Timeout",
            FailureKind::Access => "Access",
            FailureKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified problem found in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    kind: FailureKind,
    message: String,
    command: Option<String>,
    context: Option<BTreeMap<String, String>>,
}

impl FailureRecord {
    pub fn new(
        kind: FailureKind,
        message: impl Into<String>,
        command: Option<String>,
        context: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            command,
            context,
        }
    }

    /// Confusion found in a model response; carries the full response text.
    pub fn strategic(response_text: &str) -> Self {
        Self::new(
            FailureKind::Strategic,
            "Agent exhibited confusion",
            None,
            Some(response_context(response_text)),
        )
    }

    /// Syntax or runtime error reported in a model response.
    pub fn execution(response_text: &str) -> Self {
        Self::new(
            FailureKind::Execution,
            "Agent produced a syntax or runtime error",
            None,
            Some(response_context(response_text)),
        )
    }

    /// A normalized command issued often enough to count as a loop. Loop
    /// records carry no context.
    pub fn repetition(command: &str) -> Self {
        Self::new(
            FailureKind::Loop,
            "Agent used repetitive commands",
            Some(command.to_string()),
            None,
        )
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn context(&self) -> Option<&BTreeMap<String, String>> {
        self.context.as_ref()
    }
}

fn response_context(text: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("response".to_string(), text.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_canonical_casing() {
        let names: Vec<String> = FailureKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec![
                "Execution",
                "Strategic",
                "Loop",
                "Syntax",
                "Timeout",
                "Access",
                "Unknown"
            ]
        );
    }

    #[test]
    fn serializes_kind_as_snake_case() {
        let json = serde_json::to_value(FailureRecord::repetition("ls")).expect("json");
        assert_eq!(json["kind"], "loop");
        assert_eq!(json["command"], "ls");
        assert_eq!(json["context"], serde_json::Value::Null);
    }

    #[test]
    fn response_records_carry_full_text_and_no_command() {
        let record = FailureRecord::strategic("I apologize, I cannot do that");
        assert_eq!(record.kind(), FailureKind::Strategic);
        assert!(record.command().is_none());
        assert_eq!(
            record.context().and_then(|ctx| ctx.get("response")).map(String::as_str),
            Some("I apologize, I cannot do that")
        );
    }
}
