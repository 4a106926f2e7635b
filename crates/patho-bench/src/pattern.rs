//! The fixed patho2 workload pattern.
//!
//! Lines are runs of `[a-z]` ending in `a` (group 1) or `b` (group 2),
//! optionally followed by the newline that line reading retains. Only
//! group 2 is ever written out.

/// The patho2 pattern. Its trailing `\n?` consumes the retained line terminator.
pub const PATHO2: &str = "(?:([a-z]*a)|([a-z]*b))?\n?";

/// Number of capture slots, one per group declared by [`PATHO2`].
pub const CAPTURE_COUNT: usize = 2;

/// 1-based index of the group written to primary output.
pub const EMITTED_GROUP: usize = 2;
