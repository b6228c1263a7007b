//! DNS record probe.
//!
//! For each domain, performs the requested lookups (NS, MX, TXT and the DS
//! based DNSSEC check) one after another. Failures are recorded per record
//! type with the `NON-EXISTENT` / `ERROR` markers.

mod records;
mod types;

use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;

use crate::batch::Prober;
use crate::initialization::ProbeLogger;

pub use records::{
    check_dnssec, classify_dnssec, classify_records, lookup_failure, lookup_records,
    LookupFailure,
};
pub use types::{DnsRecord, DnssecStatus, LookupOutcome, RecordSelection, DNS_LAYOUT};

/// Runs the selected lookups for each domain.
pub struct DnsProber {
    resolver: TokioAsyncResolver,
    selection: RecordSelection,
    logger: ProbeLogger,
}

impl DnsProber {
    pub fn new(
        resolver: TokioAsyncResolver,
        selection: RecordSelection,
        logger: &ProbeLogger,
    ) -> Self {
        Self {
            resolver,
            selection,
            logger: logger.with_target("domain_probe::dns"),
        }
    }
}

impl Prober for DnsProber {
    type Output = DnsRecord;

    async fn probe(&self, identifier: &str) -> DnsRecord {
        let resolver = &self.resolver;
        let logger = &self.logger;
        let mut record = DnsRecord::new(identifier);

        if self.selection.ns {
            record.ns = Some(lookup_records(resolver, identifier, RecordType::NS, logger).await);
        }
        if self.selection.mx {
            record.mx = Some(lookup_records(resolver, identifier, RecordType::MX, logger).await);
        }
        if self.selection.txt {
            record.txt = Some(lookup_records(resolver, identifier, RecordType::TXT, logger).await);
        }
        if self.selection.dnssec {
            record.dnssec = Some(check_dnssec(resolver, identifier, logger).await);
        }
        record
    }

    fn is_failure(&self, output: &DnsRecord) -> bool {
        output.has_error()
    }
}
