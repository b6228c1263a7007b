//! domain_probe library: batch TLS, WHOIS and DNS checks
//!
//! This library backs three binaries that probe a list of hostnames or
//! domains against one external service each and export one record per
//! input item:
//! - `check_ssl`: leaf certificate metadata read during a TLS handshake
//! - `check_whois`: registration data from the registry/registrar WHOIS servers
//! - `check_dns`: NS, MX and TXT records and a DNSSEC (DS) check
//!
//! Records are written as text blocks on stdout, CSV or pretty-printed JSON.
//!
//! # Example
//!
//! ```no_run
//! use domain_probe::dns::{DnsProber, RecordSelection, DNS_LAYOUT};
//! use domain_probe::initialization::{init_resolver, ProbeLogger};
//! use domain_probe::{run_batch, export_results, Destination};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let logger = ProbeLogger::silent();
//! let selection = RecordSelection { ns: true, mx: true, ..Default::default() };
//! let prober = DnsProber::new(init_resolver(&logger), selection, &logger);
//!
//! let results = run_batch(&prober, &["example.com".to_string()], &logger).await;
//! export_results(&results, &DNS_LAYOUT, &Destination::Stdout)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Items are probed sequentially, in
//! input order.

pub mod app;
pub mod batch;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod tls;
mod utils;
pub mod whois;

// Re-export public API
pub use app::{run_probe, RunPlan};
pub use batch::{run_batch, Prober};
pub use config::{Destination, DnsOpt, LogFormat, LogLevel, OutputFormat, SslOpt, WhoisOpt};
pub use error_handling::{ConfigError, ProbeError, ProbeErrorKind};
pub use export::{export_results, FieldValue, Layout, Record, ToRecord};
