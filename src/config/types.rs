//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Each binary flattens [`CommonArgs`] into its own option
//! struct.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::dns::RecordSelection;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result output format selected with `--format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum OutputFormat {
    /// Human-readable blocks on standard output
    Stdout,
    /// CSV file (requires `--output`)
    Csv,
    /// Pretty-printed JSON array (requires `--output`)
    Json,
}

/// Where the exported records go, validated before any probing starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Csv(PathBuf),
    Json(PathBuf),
}

impl Destination {
    /// Combines `--format` and `--output` into a destination.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingOutput` when a file format is selected
    /// without an output path.
    pub fn resolve(format: OutputFormat, output: Option<PathBuf>) -> Result<Self, ConfigError> {
        match (format, output) {
            (OutputFormat::Stdout, _) => Ok(Destination::Stdout),
            (OutputFormat::Csv, Some(path)) => Ok(Destination::Csv(path)),
            (OutputFormat::Json, Some(path)) => Ok(Destination::Json(path)),
            (format, None) => Err(ConfigError::MissingOutput(format)),
        }
    }
}

/// Options shared by all three binaries.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Input file with one identifier per line
    #[arg(short, long, value_parser)]
    pub input: Option<PathBuf>,

    /// Output format: stdout|csv|json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Stdout)]
    pub format: OutputFormat,

    /// Output file (required for csv or json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Identifiers to check if no input file is provided
    pub identifiers: Vec<String>,
}

impl CommonArgs {
    /// Validates the output options.
    pub fn destination(&self) -> Result<Destination, ConfigError> {
        Destination::resolve(self.format, self.output.clone())
    }
}

/// Command-line options for `check_ssl`.
///
/// # Examples
///
/// ```bash
/// check_ssl https://example.com/index.html rust-lang.org
/// check_ssl -i hosts.txt -f csv -o certs.csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "check_ssl",
    about = "Check SSL certificate info for a list of URLs."
)]
pub struct SslOpt {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Command-line options for `check_whois`.
#[derive(Debug, Parser)]
#[command(name = "check_whois", about = "Check WHOIS info for a list of domains.")]
pub struct WhoisOpt {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Command-line options for `check_dns`.
///
/// # Examples
///
/// ```bash
/// check_dns -i domains.txt --ns --mx --dnssec -f json -o dns.json
/// ```
#[derive(Debug, Parser)]
#[command(name = "check_dns", about = "Check DNS records for a list of domains.")]
pub struct DnsOpt {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Retrieve NS records
    #[arg(long)]
    pub ns: bool,

    /// Retrieve MX records
    #[arg(long)]
    pub mx: bool,

    /// Retrieve TXT records
    #[arg(long)]
    pub txt: bool,

    /// Check if DNSSEC is enabled (DS record at the parent)
    #[arg(long)]
    pub dnssec: bool,
}

impl DnsOpt {
    /// Returns the requested record types.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoRecordTypes` if no record flag was given.
    pub fn selection(&self) -> Result<RecordSelection, ConfigError> {
        let selection = RecordSelection {
            ns: self.ns,
            mx: self.mx,
            txt: self.txt,
            dnssec: self.dnssec,
        };
        if selection.is_empty() {
            return Err(ConfigError::NoRecordTypes);
        }
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_destination_stdout_ignores_output() {
        let dest = Destination::resolve(OutputFormat::Stdout, Some(PathBuf::from("x.csv")));
        assert_eq!(dest.unwrap(), Destination::Stdout);
    }

    #[test]
    fn test_destination_file_formats_require_output() {
        assert!(matches!(
            Destination::resolve(OutputFormat::Csv, None),
            Err(ConfigError::MissingOutput(OutputFormat::Csv))
        ));
        assert!(matches!(
            Destination::resolve(OutputFormat::Json, None),
            Err(ConfigError::MissingOutput(OutputFormat::Json))
        ));
        assert_eq!(
            Destination::resolve(OutputFormat::Json, Some(PathBuf::from("out.json"))).unwrap(),
            Destination::Json(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn test_dns_selection_requires_a_flag() {
        let opt = DnsOpt::try_parse_from(["check_dns", "example.com"]).unwrap();
        assert!(matches!(opt.selection(), Err(ConfigError::NoRecordTypes)));

        let opt = DnsOpt::try_parse_from(["check_dns", "--mx", "example.com"]).unwrap();
        let selection = opt.selection().unwrap();
        assert!(selection.mx);
        assert!(!selection.ns && !selection.txt && !selection.dnssec);
    }

    #[test]
    fn test_common_args_defaults() {
        let opt = SslOpt::try_parse_from(["check_ssl", "a.com", "b.com"]).unwrap();
        assert_eq!(opt.common.format, OutputFormat::Stdout);
        assert!(opt.common.input.is_none());
        assert!(opt.common.output.is_none());
        assert_eq!(opt.common.identifiers, vec!["a.com", "b.com"]);
    }
}
