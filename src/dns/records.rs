//! DNS record queries (NS, MX, TXT) and the DNSSEC (DS) check.
//!
//! Each lookup is bounded by `DNS_TIMEOUT_SECS` and classified on its own;
//! one failing type never affects the others.

use std::str::FromStr;
use std::time::Duration;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoError;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_TIMEOUT_SECS;
use crate::error_handling::{categorize_resolve_error, ProbeErrorKind};
use crate::initialization::ProbeLogger;

use super::types::{DnssecStatus, LookupOutcome};

/// Why a lookup returned no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// NXDOMAIN
    NonExistent,
    /// NOERROR with an empty answer section
    NoData,
    /// Anything else, by class
    Failed(ProbeErrorKind),
}

/// Maps a resolver error onto [`LookupFailure`].
pub fn lookup_failure(error: &ResolveError) -> LookupFailure {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => LookupFailure::NonExistent,
            ResponseCode::NoError => LookupFailure::NoData,
            _ => LookupFailure::Failed(categorize_resolve_error(error)),
        },
        _ => LookupFailure::Failed(categorize_resolve_error(error)),
    }
}

/// Classifies an NS/MX/TXT lookup. An empty answer is an error.
pub fn classify_records(result: Result<Vec<String>, LookupFailure>) -> LookupOutcome {
    match result {
        Ok(values) if !values.is_empty() => LookupOutcome::Records(values),
        Ok(_) | Err(LookupFailure::NoData) | Err(LookupFailure::Failed(_)) => LookupOutcome::Error,
        Err(LookupFailure::NonExistent) => LookupOutcome::NonExistent,
    }
}

/// Classifies a DS lookup given the number of DS records returned.
pub fn classify_dnssec(result: Result<usize, LookupFailure>) -> DnssecStatus {
    match result {
        Ok(count) if count > 0 => DnssecStatus::Enabled,
        Ok(_) | Err(LookupFailure::NoData) => DnssecStatus::NotEnabled,
        Err(LookupFailure::NonExistent) => DnssecStatus::NonExistent,
        Err(LookupFailure::Failed(_)) => DnssecStatus::Error,
    }
}

/// Presentation text of one record. TXT strings are quoted, the other
/// types use their zone-file form (`10 mail.example.com.`).
fn render_rdata(rdata: &RData) -> String {
    match rdata {
        RData::TXT(txt) => txt
            .iter()
            .map(|part| format!("\"{}\"", String::from_utf8_lossy(part)))
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

/// `domain` as an absolute name, so the resolver asks for exactly that name.
pub fn absolute_name(domain: &str) -> Result<Name, ProtoError> {
    let mut name = Name::from_str(domain)?;
    name.set_fqdn(true);
    Ok(name)
}

async fn query(
    resolver: &TokioAsyncResolver,
    domain: &str,
    record_type: RecordType,
    logger: &ProbeLogger,
) -> Result<Vec<String>, LookupFailure> {
    let name = match absolute_name(domain) {
        Ok(name) => name,
        Err(e) => {
            logger.warn(format_args!("Invalid domain name {domain}: {e}"));
            return Err(LookupFailure::Failed(ProbeErrorKind::Protocol));
        }
    };

    let lookup = match tokio::time::timeout(
        Duration::from_secs(DNS_TIMEOUT_SECS),
        resolver.lookup(name, record_type),
    )
    .await
    {
        Ok(Ok(lookup)) => lookup,
        Ok(Err(e)) => {
            let failure = lookup_failure(&e);
            if let LookupFailure::Failed(kind) = failure {
                logger.warn(format_args!(
                    "{record_type} lookup failed for {domain} ({kind}): {e}"
                ));
            } else {
                logger.debug(format_args!("{record_type} lookup for {domain}: {e}"));
            }
            return Err(failure);
        }
        Err(_) => {
            logger.warn(format_args!(
                "{record_type} lookup timed out for {domain} ({DNS_TIMEOUT_SECS}s)"
            ));
            return Err(LookupFailure::Failed(ProbeErrorKind::Timeout));
        }
    };

    // CNAMEs met while resolving are part of the answer; keep the requested type only
    Ok(lookup
        .record_iter()
        .filter(|record| record.record_type() == record_type)
        .filter_map(|record| record.data())
        .map(render_rdata)
        .collect())
}

/// Looks up NS, MX or TXT records for `domain`.
pub async fn lookup_records(
    resolver: &TokioAsyncResolver,
    domain: &str,
    record_type: RecordType,
    logger: &ProbeLogger,
) -> LookupOutcome {
    classify_records(query(resolver, domain, record_type, logger).await)
}

/// Checks whether DNSSEC is enabled for `domain` (a non-empty DS record set).
pub async fn check_dnssec(
    resolver: &TokioAsyncResolver,
    domain: &str,
    logger: &ProbeLogger,
) -> DnssecStatus {
    classify_dnssec(
        query(resolver, domain, RecordType::DS, logger)
            .await
            .map(|records| records.len()),
    )
}
