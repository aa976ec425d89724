//! Test-only helpers for building log trees.

use serde_json::Value;

use crate::core::extract::ModelResponse;
use crate::core::record::LogRecord;

/// Convert a `json!` literal into a log tree.
pub fn log(value: Value) -> LogRecord {
    LogRecord::from(value)
}

/// Wrap a `json!` literal as an extracted model response.
pub fn response(value: Value) -> ModelResponse {
    ModelResponse::new(LogRecord::from(value))
}

/// A log exercising every detector: one execution response, one strategic
/// response, a command issued four times and another issued twice.
pub fn mixed_log_json() -> Value {
    serde_json::json!({
        "trajectory": [
            {
                "model_response": {"value": "Running the script now"},
                "commands": ["python solve.py <<< EOF\n1 2\nEOF"],
            },
            {
                "model_response": {
                    "value": "File \"solve.py\", line 3\nunexpected EOF while parsing",
                },
                "execution_output": {
                    "command": {"command_str": "python solve.py <<< EOF\n3 4\nEOF"},
                },
            },
            {
                "model_response": {"value": "I apologize, I cannot find the input file"},
                "commands": ["ls", "python solve.py", "ls"],
            },
            {
                "execution_output": {"command": {"command_str": "python solve.py"}},
            },
        ],
    })
}
