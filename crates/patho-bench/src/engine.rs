//! Matching capability used by the benchmark driver.
//!
//! The driver only needs two operations from a regex engine: compile a
//! pattern once, then attempt a full-string match of each line while
//! filling a fixed set of capture slots. [`Engine`] and [`FullMatcher`]
//! describe that seam; [`RegexEngine`] is the production backend.

mod backend;
mod slots;

pub use backend::{RegexEngine, RegexMatcher};
pub use slots::CaptureSlots;

use crate::error::Result;

/// Compiles a pattern into a reusable matcher.
pub trait Engine {
    /// The matcher produced by compilation.
    type Matcher: FullMatcher;

    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is malformed.
    fn compile(pattern: &str) -> Result<Self::Matcher>;
}

/// A compiled pattern that can be matched against whole lines.
///
/// A matcher carries no memory of previous lines. Implementations may keep
/// scratch space between calls, which is why matching takes `&mut self`.
pub trait FullMatcher {
    /// Number of capture groups the pattern declares, excluding the whole match.
    fn capture_count(&self) -> usize;

    /// Attempt to match the entire `line`, end to end.
    ///
    /// On success every slot holds the text of its group, or is empty when
    /// the group did not participate. On failure the slot contents are
    /// unspecified and must not be read.
    fn full_match(&mut self, line: &[u8], slots: &mut CaptureSlots) -> bool;
}
