//! The collect → probe → export pipeline shared by the three binaries.

use std::fmt::Display;
use std::process;

use anyhow::Result;

use crate::batch::{run_batch, Prober};
use crate::config::{CommonArgs, Destination};
use crate::error_handling::ConfigError;
use crate::export::{export_results, Layout, ToRecord};
use crate::initialization::ProbeLogger;

use super::input::collect_identifiers;

/// A validated run: what to probe and where the results go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub identifiers: Vec<String>,
    pub destination: Destination,
}

impl RunPlan {
    /// Validates the common options before anything touches the network.
    ///
    /// # Arguments
    ///
    /// * `args` - The parsed common options
    /// * `noun` - What the identifiers are called in error messages
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if no input was given, the input file cannot be
    /// read, or a file format lacks `--output`.
    pub fn from_args(args: &CommonArgs, noun: &'static str) -> Result<Self, ConfigError> {
        let identifiers = collect_identifiers(args.input.as_deref(), &args.identifiers, noun)?;
        let destination = args.destination()?;
        Ok(Self {
            identifiers,
            destination,
        })
    }
}

/// Probes every identifier of `plan` and exports the results.
///
/// # Returns
///
/// The number of exported records.
///
/// # Errors
///
/// Only export failures are errors; probe failures are part of the results.
pub async fn run_probe<P>(
    prober: &P,
    plan: &RunPlan,
    layout: &Layout,
    logger: &ProbeLogger,
) -> Result<usize>
where
    P: Prober,
    P::Output: ToRecord,
{
    let results = run_batch(prober, &plan.identifiers, logger).await;
    let exported = export_results(&results, layout, &plan.destination)?;
    logger.info(format_args!("Exported {exported} record(s)"));
    logger.flush();
    Ok(exported)
}

/// Prints `error` to stderr and exits with status 1.
pub fn exit_with_error(error: impl Display) -> ! {
    eprintln!("Error: {error}");
    process::exit(1);
}
