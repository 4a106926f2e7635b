//! patho-bench: regex compile-and-match timing harness
//!
//! Measures the one-time cost of compiling a regular expression separately
//! from the steady-state cost of full-matching it against every line of an
//! input stream. The workload is "patho2": lines made of runs of lowercase
//! letters ending in `a` or `b`, matched by [`PATHO2`]. For each line the
//! text captured by the `b`-terminated group is written out; the first line
//! that does not match aborts the run.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use patho_bench::{BenchConfig, run_patho2};
//!
//! let mut out = Vec::new();
//! let report = run_patho2(Cursor::new("aab\nbba\n"), &mut out, &BenchConfig::default())?;
//! assert_eq!(report.lines, 2);
//! assert_eq!(out, b"aab\n\n");
//! # Ok::<(), patho_bench::BenchError>(())
//! ```

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod report;
pub mod timing;

use std::io::{BufRead, Write};

pub use config::{BenchConfig, EnvConfig, LogFormat, LoggingConfig, OutputConfig};
pub use driver::Driver;
pub use engine::{CaptureSlots, Engine, FullMatcher, RegexEngine, RegexMatcher};
pub use error::{BenchError, Result};
pub use logging::init_logging;
pub use pattern::{CAPTURE_COUNT, EMITTED_GROUP, PATHO2};
pub use report::{RunReport, write_error};
pub use timing::{Phase, PhaseClock, Timings};

/// Compile [`PATHO2`] with [`RegexEngine`] and run it over `input`.
///
/// # Errors
///
/// Returns an error if compilation fails, a line does not match, or I/O fails.
pub fn run_patho2<R, W>(input: R, output: W, config: &BenchConfig) -> Result<RunReport>
where
    R: BufRead,
    W: Write,
{
    Driver::compile::<RegexEngine>(PATHO2)?
        .with_output(config.output)
        .run(input, output)
}
