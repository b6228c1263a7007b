//! Configuration constants.
//!
//! This module defines the constants shared by the three probes: the TLS
//! port, network timeouts and the sentinel strings written into exported
//! records.

// Network operation timeouts
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
/// DNS lookup lifetime in seconds (per record type)
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// WHOIS lookup timeout in seconds (whole lookup, referrals included)
pub const WHOIS_TIMEOUT_SECS: u64 = 10;

pub const TLS_PORT: u16 = 443;

// Sentinels
/// Written into every data field of a record whose probe failed.
pub const ERROR_SENTINEL: &str = "ERROR";
/// DNS marker for an authoritative negative answer (NXDOMAIN).
pub const NON_EXISTENT_MARKER: &str = "NON-EXISTENT";
pub const DNSSEC_ENABLED_MARKER: &str = "ENABLED";
pub const DNSSEC_NOT_ENABLED_MARKER: &str = "NOT ENABLED";

/// Separator used when a list-valued field is flattened to text.
pub const LIST_SEPARATOR: &str = ", ";
