//! Independent failure detectors.
//!
//! Each detector is a pure function over already-extracted data. Response
//! detectors treat a response without a string `value` as "no failure".

pub mod execution;
pub mod repetition;
pub mod strategic;

/// Return the first indicator contained in `text`, compared case-insensitively.
///
/// Indicators are lower-cased before comparison so mixed-case entries still match.
pub fn first_indicator<'a>(text: &str, indicators: &[&'a str]) -> Option<&'a str> {
    let haystack = text.to_lowercase();
    indicators
        .iter()
        .copied()
        .find(|indicator| haystack.contains(&indicator.to_lowercase()))
}
