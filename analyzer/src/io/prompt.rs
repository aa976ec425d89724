//! Prompt rendering for remediation suggestions.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use minijinja::{Environment, context};

use crate::core::types::FailureRecord;

const REMEDIATION_TEMPLATE: &str = include_str!("prompts/remediation.md");

/// Responses longer than this are cut before being embedded in a prompt.
const RESPONSE_BUDGET_BYTES: usize = 4_000;
/// Same for the failing command.
const COMMAND_BUDGET_BYTES: usize = 1_000;

static PROMPTS: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.add_template("remediation", REMEDIATION_TEMPLATE)
        .expect("remediation template should be valid");
    env
});

/// Render the prompt asking for a next command that addresses `failure`.
pub fn render_remediation(failure: &FailureRecord) -> Result<String> {
    let template = PROMPTS
        .get_template("remediation")
        .context("load remediation template")?;
    let response = failure
        .context()
        .and_then(|ctx| ctx.get("response"))
        .map(|text| truncate(text.trim(), RESPONSE_BUDGET_BYTES));
    let rendered = template
        .render(context! {
            kind => failure.kind().as_str(),
            message => failure.message(),
            command => failure
                .command()
                .map(|command| truncate(command, COMMAND_BUDGET_BYTES)),
            response => response,
        })
        .context("render remediation prompt")?;
    Ok(rendered)
}

fn truncate(text: &str, budget: usize) -> String {
    if text.len() <= budget {
        return text.to_string();
    }
    let mut end = budget;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}\n[truncated]", &text[..end])
}
