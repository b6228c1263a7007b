//! `check_dns`: NS/MX/TXT records and DNSSEC status for a list of domains.

use anyhow::Result;
use clap::Parser;

use domain_probe::app::{exit_with_error, run_probe, RunPlan};
use domain_probe::dns::{DnsProber, DNS_LAYOUT};
use domain_probe::initialization::{init_logger_with, init_resolver, load_env};
use domain_probe::DnsOpt;

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    let opt = DnsOpt::parse();

    let logger = init_logger_with(
        opt.common.log_level.clone().into(),
        opt.common.log_format.clone(),
    );

    // Input is checked before the record type flags, then the output options
    let identifiers = domain_probe::app::collect_identifiers(
        opt.common.input.as_deref(),
        &opt.common.identifiers,
        "domains",
    )
    .unwrap_or_else(|e| exit_with_error(e));
    let selection = opt.selection().unwrap_or_else(|e| exit_with_error(e));
    let destination = opt.common.destination().unwrap_or_else(|e| exit_with_error(e));
    let plan = RunPlan {
        identifiers,
        destination,
    };

    let prober = DnsProber::new(init_resolver(&logger), selection, &logger);

    if let Err(e) = run_probe(&prober, &plan, &DNS_LAYOUT, &logger).await {
        exit_with_error(format!("{e:#}"));
    }
    Ok(())
}
