//! `check_whois`: registration data for a list of domains.

use anyhow::Result;
use clap::Parser;

use domain_probe::app::{exit_with_error, run_probe, RunPlan};
use domain_probe::initialization::{init_logger_with, load_env};
use domain_probe::whois::{WhoisProber, WHOIS_LAYOUT};
use domain_probe::WhoisOpt;

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    let opt = WhoisOpt::parse();

    let logger = init_logger_with(
        opt.common.log_level.clone().into(),
        opt.common.log_format.clone(),
    );

    let plan = RunPlan::from_args(&opt.common, "domains").unwrap_or_else(|e| exit_with_error(e));
    let prober = WhoisProber::connect(&logger)
        .await
        .unwrap_or_else(|e| exit_with_error(e));

    if let Err(e) = run_probe(&prober, &plan, &WHOIS_LAYOUT, &logger).await {
        exit_with_error(format!("{e:#}"));
    }
    Ok(())
}
