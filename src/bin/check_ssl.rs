//! `check_ssl`: certificate metadata for a list of hosts or URLs.
//!
//! Thin wrapper around the `domain_probe` library that handles argument
//! parsing, logger setup and the exit status.

use anyhow::Result;
use clap::Parser;

use domain_probe::app::{exit_with_error, run_probe, RunPlan};
use domain_probe::initialization::{init_crypto_provider, init_logger_with, load_env};
use domain_probe::tls::{CertificateProber, CERTIFICATE_LAYOUT};
use domain_probe::SslOpt;

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    let opt = SslOpt::parse();

    let logger = init_logger_with(
        opt.common.log_level.clone().into(),
        opt.common.log_format.clone(),
    );
    init_crypto_provider();

    let plan = RunPlan::from_args(&opt.common, "URLs").unwrap_or_else(|e| exit_with_error(e));
    let prober = CertificateProber::new(&logger).unwrap_or_else(|e| exit_with_error(e));

    if let Err(e) = run_probe(&prober, &plan, &CERTIFICATE_LAYOUT, &logger).await {
        exit_with_error(format!("{e:#}"));
    }
    Ok(())
}
