//! Failure classification for recorded autonomous-agent runs.
//!
//! The crate reads an agent's execution log, pulls out every model response
//! and shell command regardless of nesting, and classifies parts of the run
//! as strategic confusion, execution errors, or repeated-command loops.
//!
//! - **[`core`]**: Pure, deterministic logic (log tree, extraction,
//!   normalization, detectors). No I/O, never fails.
//! - **[`io`]**: Side-effecting collaborators (log loading, config,
//!   reporting, the optional remediation service).
//!
//! [`analyze`] coordinates the two to implement the CLI commands.

pub mod analyze;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
