//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use domain_probe::export::Record;
use tempfile::NamedTempFile;

/// Writes `lines` to a temporary input file.
pub fn input_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write temp file");
    }
    file
}

/// A path inside a fresh temporary directory (the directory is returned so
/// it outlives the test body).
pub fn output_path(name: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    (dir, path)
}

/// WHOIS-shaped records, one of them a failure.
pub fn whois_records() -> Vec<Record> {
    vec![
        Record::new()
            .with("domain", "example.com")
            .with("registrar", "RESERVED-Internet Assigned Numbers Authority")
            .with("registrant", "")
            .with("creation_date", "1995-08-14T04:00:00+00:00")
            .with("expiration_date", "2025-08-13T04:00:00+00:00")
            .with("last_updated", "2024-08-14T07:01:34+00:00")
            .with("days_to_expiry", 30i64)
            .with("status", "clientDeleteProhibited, clientTransferProhibited"),
        Record::new()
            .with("domain", "nonexistent-domain-xyz.com")
            .with("registrar", "ERROR")
            .with("registrant", "ERROR")
            .with("creation_date", "ERROR")
            .with("expiration_date", "ERROR")
            .with("last_updated", "ERROR")
            .with("days_to_expiry", "ERROR")
            .with("status", "ERROR")
            .with("error", "No WHOIS record found for nonexistent-domain-xyz.com"),
    ]
}
