//! Error type definitions.
//!
//! This module defines the fatal configuration and initialization errors, and
//! the per-item probe error that is folded into an error-shaped record.

use std::path::PathBuf;

use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::OutputFormat;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error building the TLS client configuration.
    #[error("TLS configuration error: {0}")]
    TlsConfigError(#[from] rustls::Error),

    /// Error building the certificate verifier.
    #[error("TLS verifier error: {0}")]
    VerifierError(#[from] rustls::client::VerifierBuilderError),

    /// Error creating the WHOIS client.
    #[error("Failed to create WHOIS client: {0}")]
    WhoisClientError(String),
}

/// Configuration errors. All of them are fatal and detected before probing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `--input` nor trailing identifiers were given.
    #[error("provide either --input file or a list of {0} as arguments")]
    MissingInput(&'static str),

    /// The input file could not be read.
    #[error("input file '{}' could not be read: {source}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file format was selected without `--output`.
    #[error("Output filename required for {0} format")]
    MissingOutput(OutputFormat),

    /// `check_dns` was run without any record type flag.
    #[error("you must specify at least one record type (--ns, --mx, --txt, --dnssec)")]
    NoRecordTypes,
}

/// Classification of a failed probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeErrorKind {
    /// Connect, handshake or read did not finish in time.
    Timeout,
    /// TCP-level failure (refused, unreachable, unresolvable host).
    Connection,
    /// The peer answered but the answer was unusable (handshake failure,
    /// certificate or response parse error).
    Protocol,
    /// The service reported that the identifier does not exist.
    NotFound,
}

impl std::fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeErrorKind::Timeout => "timeout",
            ProbeErrorKind::Connection => "connection error",
            ProbeErrorKind::Protocol => "protocol error",
            ProbeErrorKind::NotFound => "not found",
        }
    }
}

/// Failure of a single probe. The message is what ends up in the `error`
/// field of the exported record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProbeError {
    pub kind: ProbeErrorKind,
    pub message: String,
}

impl ProbeError {
    pub fn new(kind: ProbeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProbeErrorKind::Timeout, message)
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ProbeErrorKind::Connection, message)
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(ProbeErrorKind::Protocol, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ProbeErrorKind::NotFound, message)
    }
}
