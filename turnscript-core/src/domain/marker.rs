//! Speaker marker recognition
//!
//! A marker line is exactly `<speaker> (<timestamp>)`, where the timestamp is
//! `H:MM` or `H:MM:SS` with one or two hour digits. The speaker name is
//! matched literally.

use crate::error::{Result, SegmentError};
use regex::Regex;

/// Timestamp group appended to the escaped speaker name.
///
/// Digits and the separating whitespace are restricted to ASCII.
const TIMESTAMP_SUFFIX: &str = r"[\t\n\x0C\r ]\(([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?)\)$";

/// Recognizes turn-start markers for one speaker
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    speaker: String,
    pattern: Regex,
}

impl MarkerMatcher {
    /// Compile the marker pattern for a speaker
    pub fn new(speaker: impl Into<String>) -> Result<Self> {
        let speaker = speaker.into();
        let source = format!("^{}{}", regex::escape(&speaker), TIMESTAMP_SUFFIX);
        let pattern = Regex::new(&source).map_err(|source| SegmentError::Pattern {
            speaker: speaker.clone(),
            source,
        })?;

        Ok(Self { speaker, pattern })
    }

    /// The speaker this matcher recognizes
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Return the timestamp if `line` is a marker for this speaker
    ///
    /// `line` is expected to be trimmed already.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|timestamp| timestamp.as_str())
    }

    /// Whether `line` is a marker for this speaker
    pub fn is_marker(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}
