//! Logger initialization.
//!
//! This module builds the [`ProbeLogger`] handle with custom formatting. The
//! handle is passed explicitly to every prober; nothing is installed as the
//! process-wide `log` logger.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::config::LogFormat;
use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logging handle given to the probers.
///
/// Records are written through an `env_logger` instance built by
/// [`init_logger_with`]; clones share the same sink.
#[derive(Clone)]
pub struct ProbeLogger {
    sink: Arc<dyn Log>,
    target: &'static str,
}

impl fmt::Debug for ProbeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeLogger")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Sink that drops everything.
struct Discard;

impl Log for Discard {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        false
    }

    fn log(&self, _record: &Record<'_>) {}

    fn flush(&self) {}
}

impl ProbeLogger {
    /// Wraps an existing sink.
    pub fn new(sink: Arc<dyn Log>) -> Self {
        Self {
            sink,
            target: "domain_probe",
        }
    }

    /// A logger that discards every record (used in tests).
    pub fn silent() -> Self {
        Self::new(Arc::new(Discard))
    }

    /// Returns a handle logging under `target`, sharing the same sink.
    pub fn with_target(&self, target: &'static str) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            target,
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Writes one record if the sink accepts its level and target.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder()
            .level(level)
            .target(self.target)
            .build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink
            .log(&Record::builder().metadata(metadata).args(args).build());
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn flush(&self) {
        self.sink.flush();
    }
}

/// Builds the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging. Output goes to
/// stderr so that the `stdout` export format stays machine-readable.
///
/// The logger reads from the `RUST_LOG` environment variable first, then the
/// provided `level` overrides it.
///
/// # Examples
///
/// ```bash
/// # Per-item progress
/// check_whois example.com --log-level info
///
/// # Structured logs
/// check_dns -i domains.txt --ns --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> ProbeLogger {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("domain_probe", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    Level::Error => level.to_string().red(),
                    Level::Warn => level.to_string().yellow(),
                    Level::Info => level.to_string().green(),
                    Level::Debug => level.to_string().blue(),
                    Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    ProbeLogger::new(Arc::new(builder.build()))
}
