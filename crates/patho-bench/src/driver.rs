//! The benchmark driver: compile once, then match every input line.
//!
//! The driver owns the matcher, the capture slots and a single line buffer
//! for the whole run. Lines are read with their terminator retained, since
//! the pattern itself consumes an optional trailing newline. The first line
//! that fails to match ends the run; nothing after it is read.

use std::io::{BufRead, Write};

use crate::config::OutputConfig;
use crate::engine::{CaptureSlots, Engine, FullMatcher};
use crate::error::{BenchError, Result};
use crate::pattern::EMITTED_GROUP;
use crate::report::RunReport;
use crate::timing::{Phase, PhaseClock};

/// Drives a single benchmark run.
#[derive(Debug)]
pub struct Driver<M> {
    matcher: M,
    slots: CaptureSlots,
    line: Vec<u8>,
    lines: u64,
    clock: PhaseClock,
    output: OutputConfig,
}

impl<M: FullMatcher> Driver<M> {
    /// Compile `pattern` with engine `E`, timing the compilation.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile or declares a
    /// different number of groups than there are capture slots.
    pub fn compile<E>(pattern: &str) -> Result<Self>
    where
        E: Engine<Matcher = M>,
    {
        let mut clock = PhaseClock::start();
        let matcher = E::compile(pattern)?;
        let slots = CaptureSlots::new();
        check_slots(&matcher, &slots)?;
        clock.compiled();
        Ok(Self::with_parts(matcher, slots, clock))
    }

    /// Wrap an already compiled matcher. Compilation time is reported as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the matcher's group count does not equal the slot count.
    pub fn new(matcher: M) -> Result<Self> {
        let mut clock = PhaseClock::start();
        let slots = CaptureSlots::new();
        check_slots(&matcher, &slots)?;
        clock.compiled();
        Ok(Self::with_parts(matcher, slots, clock))
    }

    fn with_parts(matcher: M, slots: CaptureSlots, clock: PhaseClock) -> Self {
        Self {
            matcher,
            slots,
            line: Vec::new(),
            lines: 0,
            clock,
            output: OutputConfig::default(),
        }
    }

    /// Set the output configuration.
    #[must_use]
    pub const fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Current phase of the run.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    /// Run the timing loop until end of input.
    ///
    /// For every line, writes the emitted group followed by `\n` to
    /// `output`. Returns the line count and timings once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::MatchFailure`] for the first line that does not
    /// fully match, and an I/O error if reading or writing fails.
    pub fn run<R, W>(mut self, mut input: R, mut output: W) -> Result<RunReport>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            self.line.clear();
            let read = BenchError::with_io_context(
                input.read_until(b'\n', &mut self.line),
                "reading input line",
            )?;
            if read == 0 {
                break;
            }
            self.lines += 1;

            if !self.matcher.full_match(&self.line, &mut self.slots) {
                tracing::debug!(line = self.lines, "line did not match");
                // Lines already emitted stay visible even when output is block buffered.
                let _ = output.flush();
                return Err(BenchError::match_failure(
                    self.lines,
                    std::mem::take(&mut self.line),
                ));
            }

            let captured = self.slots.get(EMITTED_GROUP).unwrap_or_default();
            BenchError::with_io_context(
                write_line(&mut output, captured, self.output.line_buffered),
                "writing captured group",
            )?;
        }

        BenchError::with_io_context(output.flush(), "flushing output")?;
        let timings = self.clock.stop();
        tracing::debug!(
            lines = self.lines,
            compilation_ms = timings.compilation_ms(),
            matching_ms = timings.matching_ms(),
            "timing loop finished"
        );
        Ok(RunReport {
            lines: self.lines,
            timings,
        })
    }
}

fn check_slots<M: FullMatcher>(matcher: &M, slots: &CaptureSlots) -> Result<()> {
    let found = matcher.capture_count();
    if found == slots.len() {
        Ok(())
    } else {
        Err(BenchError::capture_count(slots.len(), found))
    }
}

fn write_line<W: Write>(output: &mut W, text: &[u8], flush: bool) -> std::io::Result<()> {
    output.write_all(text)?;
    output.write_all(b"\n")?;
    if flush {
        output.flush()?;
    }
    Ok(())
}
