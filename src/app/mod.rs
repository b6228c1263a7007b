//! Main application modules.
//!
//! This module provides input collection, hostname normalization and the
//! run pipeline used by the binaries.

pub mod input;
pub mod run;
pub mod url;

// Re-export public API
pub use input::collect_identifiers;
pub use run::{exit_with_error, run_probe, RunPlan};
pub use url::normalize_hostname;
