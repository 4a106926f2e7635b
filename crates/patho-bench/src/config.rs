//! Configuration types for patho-bench.
//!
//! Only ambient behavior is configurable: logging and how primary output is
//! flushed. The pattern is a compile-time constant and is never read from
//! the environment.

mod env;

pub use env::{DEFAULT_PREFIX, EnvConfig, vars};

use crate::error::{BenchError, Result};

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for a benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Primary output configuration.
    pub output: OutputConfig,
}

impl BenchConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from the environment.
    ///
    /// `PATHO2_LOG_LEVEL` falls back to `RUST_LOG`, then to [`DEFAULT_LOG_LEVEL`].
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHO2_LOG_FORMAT` names an unknown format.
    pub fn from_env(env: &EnvConfig) -> Result<Self> {
        let level = env
            .get(vars::LOG_LEVEL)
            .or_else(|| EnvConfig::no_prefix().get("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let format = match env.get(vars::LOG_FORMAT) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };
        let line_buffered = env.bool_or(vars::LINE_BUFFERED, true);

        Ok(Self {
            logging: LoggingConfig { level, format },
            output: OutputConfig { line_buffered },
        })
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Set the output configuration.
    #[must_use]
    pub const fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

/// Configuration for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `debug` or `patho_bench=trace`.
    pub level: String,

    /// Log format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the log format.
    #[must_use]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,

    /// Newline-delimited JSON.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" | "ndjson" => Ok(Self::Json),
            other => Err(BenchError::config(format!(
                "unknown log format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Configuration for primary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Flush after every emitted line. When false, output is flushed once at
    /// end of input.
    pub line_buffered: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_buffered: true,
        }
    }
}

impl OutputConfig {
    /// Set whether to flush after every line.
    #[must_use]
    pub const fn line_buffered(mut self, enabled: bool) -> Self {
        self.line_buffered = enabled;
        self
    }
}
