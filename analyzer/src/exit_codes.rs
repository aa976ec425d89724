//! Stable exit codes for analyzer CLI commands.

/// Analysis completed, whether or not failures were found.
pub const OK: i32 = 0;
/// Input could not be read or parsed, config was invalid, or the report could not be written.
pub const INVALID: i32 = 1;
