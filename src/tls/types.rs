//! TLS certificate data structures and their export layout.

use chrono::{DateTime, Utc};

use crate::error_handling::ProbeError;
use crate::export::{Column, Columns, FieldValue, Layout, Record, ToRecord, ERROR_KEY};

use super::extract::format_certificate_time;

/// Certificate metadata read from the peer's leaf certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateInfo {
    /// Issuer distinguished name (e.g. `C=US, O=Let's Encrypt, CN=R3`)
    pub issuer: String,
    /// Subject distinguished name
    pub subject: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    /// Whole days until `not_after`, negative once expired
    pub days_to_expiry: i64,
    /// Uppercase hexadecimal serial number
    pub serial_number: String,
    /// X.509 version number (3 for v3 certificates)
    pub version: u32,
    /// Negotiated protocol version (e.g. `TLSv1_3`)
    pub tls_version: String,
}

/// Result of probing one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    pub hostname: String,
    pub result: Result<CertificateInfo, ProbeError>,
}

const COLUMNS: &[Column] = &[
    Column::new("issuer", "Issuer"),
    Column::new("subject", "Subject"),
    Column::new("not_before", "Not Before"),
    Column::new("not_after", "Not After"),
    Column::new("days_to_expiry", "Days to Expiry"),
    Column::new("serial_number", "Serial Number"),
    Column::new("version", "Version"),
    Column::new("tls_version", "TLS Version"),
];

/// Export layout of certificate records.
pub const CERTIFICATE_LAYOUT: Layout = Layout {
    identifier: Column::new("hostname", "Host"),
    columns: Columns::Fixed(COLUMNS),
};

impl ToRecord for CertificateRecord {
    fn to_record(&self) -> Record {
        let record = Record::new().with("hostname", self.hostname.as_str());
        match &self.result {
            Ok(info) => record
                .with("issuer", info.issuer.as_str())
                .with("subject", info.subject.as_str())
                .with("not_before", format_certificate_time(info.not_before))
                .with("not_after", format_certificate_time(info.not_after))
                .with("days_to_expiry", info.days_to_expiry)
                .with("serial_number", info.serial_number.as_str())
                .with("version", i64::from(info.version))
                .with("tls_version", info.tls_version.as_str()),
            Err(e) => {
                let mut record = record;
                for column in COLUMNS {
                    record.push(column.key, FieldValue::error());
                }
                record.with(ERROR_KEY, e.message.as_str())
            }
        }
    }
}
