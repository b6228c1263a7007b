//! Error categorization.
//!
//! Maps I/O, resolver and WHOIS client failures onto [`ProbeErrorKind`] so
//! the batch can log failures by class while the record keeps the original
//! message.

use std::io;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::types::ProbeErrorKind;

/// Categorizes a socket-level error.
///
/// Timeouts reported by the OS are kept apart from the other connection
/// failures; malformed data is a protocol error.
pub fn categorize_io_error(error: &io::Error) -> ProbeErrorKind {
    match error.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ProbeErrorKind::Timeout,
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => ProbeErrorKind::Protocol,
        _ => ProbeErrorKind::Connection,
    }
}

/// Categorizes a DNS resolution error.
///
/// NXDOMAIN is `NotFound`; an answer without records is a `Protocol`
/// outcome; timeouts and transport failures keep their own classes.
pub fn categorize_resolve_error(error: &ResolveError) -> ProbeErrorKind {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                ProbeErrorKind::NotFound
            } else {
                ProbeErrorKind::Protocol
            }
        }
        ResolveErrorKind::Timeout => ProbeErrorKind::Timeout,
        ResolveErrorKind::Io(_) => ProbeErrorKind::Connection,
        _ => ProbeErrorKind::Protocol,
    }
}

/// Categorizes a WHOIS client error from its message.
///
/// The client reports failures as text, so the class is read from it.
pub fn categorize_whois_error(message: &str) -> ProbeErrorKind {
    let lower = message.to_lowercase();
    if lower.contains("timeout") || lower.contains("timed out") {
        ProbeErrorKind::Timeout
    } else if lower.contains("no match") || lower.contains("domain not found") {
        ProbeErrorKind::NotFound
    } else if ["connect", "network", "refused", "unreachable", "i/o", "io error"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        ProbeErrorKind::Connection
    } else {
        ProbeErrorKind::Protocol
    }
}
