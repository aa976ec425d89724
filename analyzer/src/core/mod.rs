//! Deterministic, pure analysis logic.
//!
//! Core modules perform no I/O and never fail: shape defects in the log are
//! recovered where they occur and simply contribute nothing.

pub mod detectors;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod types;
