//! patho2: time compilation and per-line full matching of the patho2 pattern.
//!
//! Reads lines from stdin and writes the `b`-terminated capture of each to
//! stdout. Diagnostics and timings go to stderr. Exits 1 on the first line
//! that does not match, 2 on any other fatal error.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use patho_bench::error::EXIT_FATAL;
use patho_bench::{
    BenchConfig, EnvConfig, Result, RunReport, init_logging, run_patho2, write_error,
};

fn run(config: &BenchConfig) -> Result<RunReport> {
    let input = io::stdin().lock();
    let stdout = io::stdout().lock();
    if config.output.line_buffered {
        run_patho2(input, stdout, config)
    } else {
        run_patho2(input, BufWriter::new(stdout), config)
    }
}

fn main() -> ExitCode {
    let result = BenchConfig::from_env(&EnvConfig::default()).and_then(|config| {
        init_logging(&config.logging)?;
        run(&config)
    });

    let stderr = io::stderr().lock();
    match result {
        Ok(report) => {
            if report.write_summary(stderr).is_err() {
                return ExitCode::from(EXIT_FATAL);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = write_error(&err, stderr);
            ExitCode::from(err.exit_code())
        }
    }
}
