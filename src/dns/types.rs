//! DNS probe data structures.

use crate::config::{
    DNSSEC_ENABLED_MARKER, DNSSEC_NOT_ENABLED_MARKER, ERROR_SENTINEL, NON_EXISTENT_MARKER,
};
use crate::export::{Column, Columns, FieldValue, Layout, Record, ToRecord};

/// Record types requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSelection {
    pub ns: bool,
    pub mx: bool,
    pub txt: bool,
    pub dnssec: bool,
}

impl RecordSelection {
    pub fn is_empty(&self) -> bool {
        !(self.ns || self.mx || self.txt || self.dnssec)
    }
}

/// Outcome of one NS/MX/TXT lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Record values in presentation format.
    Records(Vec<String>),
    /// The domain does not exist (NXDOMAIN).
    NonExistent,
    /// Timeout, server failure, empty answer or any other resolution error.
    Error,
}

impl LookupOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, LookupOutcome::Error)
    }
}

impl From<&LookupOutcome> for FieldValue {
    fn from(outcome: &LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Records(values) => FieldValue::List(values.clone()),
            LookupOutcome::NonExistent => FieldValue::from(NON_EXISTENT_MARKER),
            LookupOutcome::Error => FieldValue::from(ERROR_SENTINEL),
        }
    }
}

/// Whether the parent zone publishes a DS record set for the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnssecStatus {
    Enabled,
    NotEnabled,
    NonExistent,
    Error,
}

impl DnssecStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnssecStatus::Enabled => DNSSEC_ENABLED_MARKER,
            DnssecStatus::NotEnabled => DNSSEC_NOT_ENABLED_MARKER,
            DnssecStatus::NonExistent => NON_EXISTENT_MARKER,
            DnssecStatus::Error => ERROR_SENTINEL,
        }
    }
}

impl std::fmt::Display for DnssecStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookups for one domain. `None` means the type was not requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsRecord {
    pub domain: String,
    pub ns: Option<LookupOutcome>,
    pub mx: Option<LookupOutcome>,
    pub txt: Option<LookupOutcome>,
    pub dnssec: Option<DnssecStatus>,
}

impl DnsRecord {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    /// Whether any requested lookup ended in an error.
    pub fn has_error(&self) -> bool {
        [&self.ns, &self.mx, &self.txt]
            .into_iter()
            .flatten()
            .any(LookupOutcome::is_error)
            || self.dnssec == Some(DnssecStatus::Error)
    }
}

/// Export layout of DNS records: columns follow the requested types.
pub const DNS_LAYOUT: Layout = Layout {
    identifier: Column::new("domain", "Domain"),
    columns: Columns::FromFirstRecord,
};

impl ToRecord for DnsRecord {
    fn to_record(&self) -> Record {
        let mut record = Record::new().with("domain", self.domain.as_str());
        for (key, outcome) in [("NS", &self.ns), ("MX", &self.mx), ("TXT", &self.txt)] {
            if let Some(outcome) = outcome {
                record.push(key, FieldValue::from(outcome));
            }
        }
        if let Some(status) = self.dnssec {
            record.push("DNSSEC", status.as_str());
        }
        record
    }
}
