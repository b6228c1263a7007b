//! Tests for command-line parsing of the three binaries.

use clap::Parser;
use domain_probe::config::{LogFormat, LogLevel, OutputFormat};
use domain_probe::{ConfigError, Destination, DnsOpt, SslOpt, WhoisOpt};
use std::path::PathBuf;

#[test]
fn test_ssl_defaults() {
    let opt = SslOpt::try_parse_from(["check_ssl", "example.com"]).unwrap();
    assert_eq!(opt.common.format, OutputFormat::Stdout);
    assert!(matches!(opt.common.log_level, LogLevel::Warn));
    assert!(matches!(opt.common.log_format, LogFormat::Plain));
    assert_eq!(opt.common.identifiers, ["example.com"]);
    assert_eq!(opt.common.destination().unwrap(), Destination::Stdout);
}

#[test]
fn test_short_flags() {
    let opt = SslOpt::try_parse_from([
        "check_ssl", "-i", "hosts.txt", "-f", "csv", "-o", "certs.csv",
    ])
    .unwrap();
    assert_eq!(opt.common.input, Some(PathBuf::from("hosts.txt")));
    assert_eq!(
        opt.common.destination().unwrap(),
        Destination::Csv(PathBuf::from("certs.csv"))
    );
}

#[test]
fn test_json_without_output_is_config_error() {
    let opt = WhoisOpt::try_parse_from(["check_whois", "-f", "json", "example.com"]).unwrap();
    let err = opt.common.destination().unwrap_err();
    assert!(matches!(err, ConfigError::MissingOutput(OutputFormat::Json)));
    assert_eq!(err.to_string(), "Output filename required for JSON format");
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(SslOpt::try_parse_from(["check_ssl", "-f", "xml", "example.com"]).is_err());
}

#[test]
fn test_dns_record_flags() {
    let opt = DnsOpt::try_parse_from(["check_dns", "--ns", "--mx", "example.com"]).unwrap();
    let selection = opt.selection().unwrap();
    assert!(selection.ns && selection.mx);
    assert!(!selection.txt && !selection.dnssec);
}

#[test]
fn test_dns_without_record_flags() {
    let opt = DnsOpt::try_parse_from(["check_dns", "-i", "domains.txt"]).unwrap();
    assert!(matches!(opt.selection(), Err(ConfigError::NoRecordTypes)));
}

#[test]
fn test_log_options() {
    let opt = DnsOpt::try_parse_from([
        "check_dns",
        "--dnssec",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "example.com",
    ])
    .unwrap();
    assert!(matches!(opt.common.log_level, LogLevel::Debug));
    assert!(matches!(opt.common.log_format, LogFormat::Json));
}
