//! Integration tests for the benchmark driver.

use std::io::{self, BufRead, Cursor, Read};

use patho_bench::{
    BenchConfig, BenchError, CaptureSlots, Driver, FullMatcher, OutputConfig, PATHO2, Phase,
    RegexEngine, run_patho2,
};

fn run(input: &[u8]) -> (patho_bench::Result<patho_bench::RunReport>, Vec<u8>) {
    let mut out = Vec::new();
    let result = run_patho2(Cursor::new(input), &mut out, &BenchConfig::default());
    (result, out)
}

#[test]
fn one_output_line_per_input_line_in_order() {
    let (result, out) = run(b"ab\nb\naaaab\nba\n\nbbbbbbbbbbbb\n");
    let report = result.unwrap();
    assert_eq!(report.lines, 6);
    assert_eq!(out, b"ab\nb\naaaab\n\n\nbbbbbbbbbbbb\n");
}

#[test]
fn a_terminated_line_still_writes_an_empty_line() {
    let (result, out) = run(b"bba\n");
    assert!(result.is_ok());
    assert_eq!(out, b"\n");
}

#[test]
fn mixed_example_aborts_on_third_line() {
    let (result, out) = run(b"aab\nbba\nzzz\n");
    let err = result.unwrap_err();
    assert!(matches!(err, BenchError::MatchFailure { line: 3, .. }));
    assert_eq!(err.offending_line(), Some(&b"zzz\n"[..]));
    assert_eq!(out, b"aab\n\n");
}

#[test]
fn digit_on_first_line_produces_no_output() {
    let (result, out) = run(b"ab1\nab\n");
    let err = result.unwrap_err();
    assert!(matches!(err, BenchError::MatchFailure { line: 1, .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
}

#[test]
fn carriage_return_is_not_stripped() {
    let (result, _) = run(b"ab\r\n");
    assert!(matches!(
        result.unwrap_err(),
        BenchError::MatchFailure { line: 1, .. }
    ));
}

#[test]
fn same_input_gives_identical_output() {
    let input = b"abab\naba\nbbbbbb\nab\n";
    let (_, first) = run(input);
    let (_, second) = run(input);
    assert_eq!(first, second);
}

#[test]
fn long_line_is_matched_whole() {
    let mut line = vec![b'a'; 100_000];
    line.push(b'b');
    line.push(b'\n');
    let (result, out) = run(&line);
    assert_eq!(result.unwrap().lines, 1);
    assert_eq!(out.len(), line.len());
}

/// Reader that records how many bytes were consumed.
struct CountingReader<R> {
    inner: R,
    consumed: usize,
}

impl<R: BufRead> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed += n;
        Ok(n)
    }
}

impl<R: BufRead> BufRead for CountingReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.consumed += amt;
        self.inner.consume(amt);
    }
}

#[test]
fn nothing_is_consumed_after_the_failing_line() {
    let mut reader = CountingReader {
        inner: Cursor::new(&b"ab\nzz\nab\nab\n"[..]),
        consumed: 0,
    };
    let driver = Driver::compile::<RegexEngine>(PATHO2).unwrap();
    let result = driver.run(&mut reader, io::sink());
    assert!(result.is_err());
    assert_eq!(reader.consumed, "ab\nzz\n".len());
}

/// Fails every line after the first `limit`.
#[derive(Debug)]
struct LimitMatcher {
    limit: usize,
    seen: usize,
}

impl FullMatcher for LimitMatcher {
    fn capture_count(&self) -> usize {
        2
    }

    fn full_match(&mut self, _line: &[u8], slots: &mut CaptureSlots) -> bool {
        self.seen += 1;
        slots.set(2, b"ok");
        self.seen <= self.limit
    }
}

#[test]
fn custom_matcher_drives_fail_fast() {
    let driver = Driver::new(LimitMatcher { limit: 2, seen: 0 }).unwrap();
    assert_eq!(driver.phase(), Phase::TimingLoop);
    let mut out = Vec::new();
    let err = driver
        .run(Cursor::new("x\ny\nz\nw\n"), &mut out)
        .unwrap_err();
    assert!(matches!(err, BenchError::MatchFailure { line: 3, .. }));
    assert_eq!(out, b"ok\nok\n");
}

/// Writer that fails every write.
struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_is_fatal_io_error() {
    let driver = Driver::compile::<RegexEngine>(PATHO2).unwrap();
    let err = driver.run(Cursor::new("ab\n"), BrokenPipe).unwrap_err();
    assert!(matches!(err, BenchError::IoWithContext { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn block_buffered_config_is_applied() {
    let config = BenchConfig::new().output(OutputConfig::default().line_buffered(false));
    let mut out = Vec::new();
    let report = run_patho2(Cursor::new("ab\nba\n"), &mut out, &config).unwrap();
    assert_eq!(report.lines, 2);
    assert_eq!(out, b"ab\n\n");
}
