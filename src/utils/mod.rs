//! Utility functions shared by the probes.
//!
//! This module provides:
//! - Expiry day arithmetic
//! - Text sanitization for values received from remote services

pub mod sanitize;
mod time;

pub use sanitize::sanitize_field_value;
pub use time::days_until;
