//! Phase clock for separating compilation cost from matching cost.
//!
//! A run moves through three phases exactly once, in order:
//! [`Phase::Compiling`], [`Phase::TimingLoop`], [`Phase::Reporting`].
//! The clock stamps the boundaries with monotonic instants, so neither
//! derived duration can be negative.

use std::fmt;
use std::time::{Duration, Instant};

/// Phases of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Building the matcher from the pattern.
    Compiling,
    /// Reading and matching lines.
    TimingLoop,
    /// Writing the summary.
    Reporting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compiling => "compiling",
            Self::TimingLoop => "timing-loop",
            Self::Reporting => "reporting",
        };
        f.write_str(name)
    }
}

/// Records the three timestamps of a run.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    pre_compile: Instant,
    start: Option<Instant>,
    stop: Option<Instant>,
}

impl PhaseClock {
    /// Start the clock; stamps `preCompile` and enters [`Phase::Compiling`].
    #[must_use]
    pub fn start() -> Self {
        tracing::debug!(phase = %Phase::Compiling, "entering phase");
        Self {
            pre_compile: Instant::now(),
            start: None,
            stop: None,
        }
    }

    /// Stamp `start` and enter [`Phase::TimingLoop`].
    ///
    /// Later calls keep the first stamp.
    pub fn compiled(&mut self) {
        if self.start.is_none() {
            self.start = Some(Instant::now());
            tracing::debug!(phase = %Phase::TimingLoop, "entering phase");
        }
    }

    /// Stamp `stop` and enter [`Phase::Reporting`], returning the durations.
    ///
    /// Stamps `start` first if compilation was never marked done.
    pub fn stop(&mut self) -> Timings {
        self.compiled();
        if self.stop.is_none() {
            self.stop = Some(Instant::now());
            tracing::debug!(phase = %Phase::Reporting, "entering phase");
        }
        self.timings()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.start, self.stop) {
            (None, _) => Phase::Compiling,
            (Some(_), None) => Phase::TimingLoop,
            (Some(_), Some(_)) => Phase::Reporting,
        }
    }

    /// Durations measured so far; phases still running count up to now.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let now = Instant::now();
        let start = self.start.unwrap_or(now);
        let stop = self.stop.unwrap_or(now);
        Timings {
            compilation: start.duration_since(self.pre_compile),
            matching: stop.saturating_duration_since(start),
        }
    }
}

/// Derived durations of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    /// `start - preCompile`.
    pub compilation: Duration,
    /// `stop - start`.
    pub matching: Duration,
}

impl Timings {
    /// Compilation time in whole milliseconds.
    #[must_use]
    pub const fn compilation_ms(&self) -> u64 {
        self.compilation.as_millis() as u64
    }

    /// Matching time in whole milliseconds.
    #[must_use]
    pub const fn matching_ms(&self) -> u64 {
        self.matching.as_millis() as u64
    }
}
