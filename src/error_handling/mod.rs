//! Error handling.
//!
//! This module provides:
//! - Fatal configuration and initialization error types
//! - The per-item [`ProbeError`] with its classified kind
//! - Categorization of socket, resolver and WHOIS client errors
//!
//! Only configuration errors stop a run. Probe errors are folded into the
//! record of the item that failed and the batch moves on.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_io_error, categorize_resolve_error, categorize_whois_error};
pub use types::{ConfigError, InitializationError, ProbeError, ProbeErrorKind};
