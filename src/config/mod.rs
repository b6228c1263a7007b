//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (ports, timeouts, sentinels)
//! - CLI option types and parsing
//! - Output destination validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    CommonArgs, Destination, DnsOpt, LogFormat, LogLevel, OutputFormat, SslOpt, WhoisOpt,
};
