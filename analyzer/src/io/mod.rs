//! I/O collaborators around the pure analysis core.

pub mod config;
pub mod log_file;
pub mod process;
pub mod prompt;
pub mod remediation;
pub mod report;
pub mod response_dump;
