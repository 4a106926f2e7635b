//! Diagnostic reporting for finished and aborted runs.

use std::io::{self, Write};

use crate::error::BenchError;
use crate::timing::Timings;

/// Outcome of a run in which every line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Number of lines read and matched.
    pub lines: u64,
    /// Compilation and matching durations.
    pub timings: Timings,
}

impl RunReport {
    /// Write the success confirmation and both timings.
    ///
    /// ```text
    /// matching was successful.
    /// compilation (ms): 0
    /// matching (ms): 12
    /// ```
    pub fn write_summary<W: Write>(&self, mut diag: W) -> io::Result<()> {
        writeln!(diag, "matching was successful.")?;
        writeln!(diag, "compilation (ms): {}", self.timings.compilation_ms())?;
        writeln!(diag, "matching (ms): {}", self.timings.matching_ms())?;
        diag.flush()
    }
}

/// Write the diagnostic for a fatal error.
///
/// A match failure is reported as `match error on line N` followed by the
/// offending line exactly as it was read. Other errors get a single
/// `error: ...` line.
pub fn write_error<W: Write>(err: &BenchError, mut diag: W) -> io::Result<()> {
    match err {
        BenchError::MatchFailure { content, .. } => {
            writeln!(diag, "{err}")?;
            diag.write_all(content)?;
        }
        _ => writeln!(diag, "error: {err}")?,
    }
    diag.flush()
}
