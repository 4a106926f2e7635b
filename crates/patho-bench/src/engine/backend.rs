//! `regex` crate backend.

use regex::bytes::{CaptureLocations, Regex};

use super::{CaptureSlots, Engine, FullMatcher};
use crate::error::Result;

/// Engine backed by [`regex::bytes::Regex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEngine;

impl Engine for RegexEngine {
    type Matcher = RegexMatcher;

    fn compile(pattern: &str) -> Result<RegexMatcher> {
        RegexMatcher::new(pattern)
    }
}

/// A compiled, end-to-end anchored pattern.
///
/// Lines are matched as raw bytes so that input which is not valid UTF-8
/// fails to match instead of aborting the read.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pattern: String,
    regex: Regex,
    /// Scratch group offsets, reused for every line.
    locations: CaptureLocations,
}

impl RegexMatcher {
    /// Compile `pattern` for full-string matching.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        // The non-capturing wrapper leaves group numbering unchanged.
        let regex = Regex::new(&format!(r"\A(?:{pattern})\z"))?;
        let locations = regex.capture_locations();
        tracing::debug!(
            pattern,
            groups = regex.captures_len() - 1,
            "compiled full-match pattern"
        );
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            locations,
        })
    }

    /// The pattern as given, without anchors.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl FullMatcher for RegexMatcher {
    fn capture_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    fn full_match(&mut self, line: &[u8], slots: &mut CaptureSlots) -> bool {
        if self.regex.captures_read(&mut self.locations, line).is_none() {
            return false;
        }
        for (index, slot) in slots.iter_mut().enumerate() {
            slot.clear();
            if let Some((start, end)) = self.locations.get(index + 1) {
                slot.extend_from_slice(&line[start..end]);
            }
        }
        true
    }
}
