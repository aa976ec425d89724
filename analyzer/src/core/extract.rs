//! Recursive extraction of model responses and commands from a log tree.
//!
//! Both passes walk the tree depth-first, pre-order, visiting map entries in
//! document order and sequence elements by index. A node matched by an
//! extraction rule is consumed by that rule and not descended into, so no
//! node contributes twice.

use tracing::debug;

use crate::core::record::{LogRecord, Scalar};

const MODEL_RESPONSE_KEY: &str = "model_response";
const COMMANDS_KEY: &str = "commands";
const EXECUTION_OUTPUT_KEY: &str = "execution_output";

/// A shell command the agent attempted to run, as recorded.
pub type Command = String;

/// A record found under a `model_response` key.
///
/// Kept verbatim even when malformed; consumers go through [`ModelResponse::text`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse(LogRecord);

impl ModelResponse {
    pub fn new(record: LogRecord) -> Self {
        Self(record)
    }

    /// The emitted text (`value` field), if the response carries a string one.
    pub fn text(&self) -> Option<&str> {
        self.0.get("value").and_then(LogRecord::as_str)
    }

    pub fn record(&self) -> &LogRecord {
        &self.0
    }
}

/// Responses and commands pulled from one log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub responses: Vec<ModelResponse>,
    pub commands: Vec<Command>,
}

/// Run both extraction passes over `root`.
pub fn extract(root: &LogRecord) -> Extraction {
    let extraction = Extraction {
        responses: extract_model_responses(root),
        commands: extract_commands(root),
    };
    debug!(
        responses = extraction.responses.len(),
        commands = extraction.commands.len(),
        "extracted log tree"
    );
    extraction
}

/// Collect every value stored under a `model_response` key, at any depth.
pub fn extract_model_responses(root: &LogRecord) -> Vec<ModelResponse> {
    let mut responses = Vec::new();
    collect_responses(root, &mut responses);
    responses
}

/// Collect commands from `commands` lists and `execution_output.command.command_str`.
pub fn extract_commands(root: &LogRecord) -> Vec<Command> {
    let mut commands = Vec::new();
    collect_commands(root, &mut commands);
    commands
}

fn collect_responses(node: &LogRecord, out: &mut Vec<ModelResponse>) {
    match node {
        LogRecord::Map(entries) => {
            for (key, value) in entries {
                if key == MODEL_RESPONSE_KEY {
                    out.push(ModelResponse::new(value.clone()));
                } else if value.is_container() {
                    collect_responses(value, out);
                }
            }
        }
        LogRecord::Sequence(items) => {
            for item in items {
                collect_responses(item, out);
            }
        }
        LogRecord::Scalar(_) => {}
    }
}

fn collect_commands(node: &LogRecord, out: &mut Vec<Command>) {
    match node {
        LogRecord::Map(entries) => {
            for (key, value) in entries {
                match (key.as_str(), value) {
                    (COMMANDS_KEY, LogRecord::Sequence(items)) => {
                        out.extend(items.iter().map(command_text));
                    }
                    (EXECUTION_OUTPUT_KEY, LogRecord::Map(_)) => {
                        if let Some(command) = execution_command(value) {
                            out.push(command_text(command));
                        }
                    }
                    (_, value) if value.is_container() => collect_commands(value, out),
                    _ => {}
                }
            }
        }
        LogRecord::Sequence(items) => {
            for item in items {
                collect_commands(item, out);
            }
        }
        LogRecord::Scalar(_) => {}
    }
}

/// Resolve `command.command_str`; any missing or empty link yields `None`.
/// `command.command_str` of an execution output, unless it is null or empty.
fn execution_command(output: &LogRecord) -> Option<&LogRecord> {
    output
        .get("command")?
        .get("command_str")
        .filter(|value| !matches!(value, LogRecord::Scalar(Scalar::Null)))
        .filter(|value| value.as_str() != Some(""))
}

fn command_text(item: &LogRecord) -> Command {
    match item.as_str() {
        Some(text) => text.to_string(),
        None => item.to_json_string(),
    }
}
