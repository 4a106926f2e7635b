//! Error types for patho-bench.
//!
//! Every error is fatal for the run. A line that fails to match carries its
//! 1-based line number and the raw bytes that were read, so the binary can
//! dump them verbatim to the diagnostic stream.

use thiserror::Error;

/// Exit status for a run aborted by a line that did not match.
pub const EXIT_MATCH_FAILURE: u8 = 1;

/// Exit status for every other fatal error (bad pattern, I/O, configuration).
pub const EXIT_FATAL: u8 = 2;

/// The main error type for patho-bench operations.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The pattern failed to compile.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The pattern declares a different number of groups than there are capture slots.
    #[error("pattern declares {found} capture groups, expected {expected}")]
    CaptureCount {
        /// Number of capture slots the driver owns.
        expected: usize,
        /// Number of groups the compiled pattern declares.
        found: usize,
    },

    /// A line did not fully match the pattern.
    #[error("match error on line {line}")]
    MatchFailure {
        /// 1-based line number.
        line: u64,
        /// The raw line, including its terminator if one was read.
        content: Vec<u8>,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Result type alias for patho-bench operations.
pub type Result<T> = std::result::Result<T, BenchError>;

impl BenchError {
    /// Create a match failure error.
    pub fn match_failure(line: u64, content: impl Into<Vec<u8>>) -> Self {
        Self::MatchFailure {
            line,
            content: content.into(),
        }
    }

    /// Create a capture count mismatch error.
    #[must_use]
    pub const fn capture_count(expected: usize, found: usize) -> Self {
        Self::CaptureCount { expected, found }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O result with context.
    pub fn with_io_context<T>(result: std::io::Result<T>, context: impl Into<String>) -> Result<T> {
        result.map_err(|e| Self::io_context(context, e))
    }

    /// Check if this is a line match failure.
    #[must_use]
    pub const fn is_match_failure(&self) -> bool {
        matches!(self, Self::MatchFailure { .. })
    }

    /// Get the offending line if this is a match failure.
    #[must_use]
    pub fn offending_line(&self) -> Option<&[u8]> {
        match self {
            Self::MatchFailure { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MatchFailure { .. } => EXIT_MATCH_FAILURE,
            _ => EXIT_FATAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_failure_display() {
        let err = BenchError::match_failure(3, b"zzz\n".to_vec());
        assert_eq!(err.to_string(), "match error on line 3");
        assert_eq!(err.offending_line(), Some(&b"zzz\n"[..]));
        assert!(err.is_match_failure());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(BenchError::match_failure(1, "x").exit_code(), 1);
        assert_eq!(BenchError::capture_count(2, 3).exit_code(), 2);
        assert_eq!(BenchError::config("bad").exit_code(), 2);

        let io_err = BenchError::Io(std::io::Error::other("broken pipe"));
        assert_eq!(io_err.exit_code(), 2);
        assert!(io_err.offending_line().is_none());
    }

    #[test]
    fn invalid_pattern_from_regex() {
        let err: BenchError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid regex pattern"));
        assert!(!err.is_match_failure());
    }

    #[test]
    fn capture_count_display() {
        let msg = BenchError::capture_count(2, 1).to_string();
        assert!(msg.contains("1 capture groups"));
        assert!(msg.contains("expected 2"));
    }

    #[test]
    fn with_io_context_helper() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        let err = BenchError::with_io_context(result, "writing captured group").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("writing captured group"));
        assert!(msg.contains("pipe closed"));
    }

    #[test]
    fn with_io_context_success() {
        let result: std::io::Result<usize> = Ok(7);
        let value = BenchError::with_io_context(result, "reading line").unwrap();
        assert_eq!(value, 7);
    }
}
