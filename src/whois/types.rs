//! WHOIS data structures.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::config::LIST_SEPARATOR;
use crate::error_handling::ProbeError;
use crate::export::{Column, Columns, FieldValue, Layout, Record, ToRecord, ERROR_KEY};

/// A date as written by a WHOIS server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisDate {
    /// No offset given; treated as UTC when computing expiry.
    Naive(NaiveDateTime),
    /// Explicit offset (`Z`, `+00:00`, `UTC`...).
    Aware(DateTime<FixedOffset>),
    /// Text that is not a recognizable date, kept verbatim.
    Text(String),
}

impl WhoisDate {
    /// The instant this date denotes, if it is a date at all.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            WhoisDate::Naive(naive) => Some(naive.and_utc()),
            WhoisDate::Aware(aware) => Some(aware.with_timezone(&Utc)),
            WhoisDate::Text(_) => None,
        }
    }

    /// ISO-8601 text; the offset is only written when one was given.
    pub fn render(&self) -> String {
        match self {
            WhoisDate::Naive(naive) => naive.format("%Y-%m-%dT%H:%M:%S").to_string(),
            WhoisDate::Aware(aware) => aware.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            WhoisDate::Text(text) => text.clone(),
        }
    }
}

/// Registration data parsed from a WHOIS answer.
///
/// Date fields hold every distinct value found, in order of appearance;
/// registries and registrars often both report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisInfo {
    pub registrar: Option<String>,
    pub registrant: Option<String>,
    pub creation_date: Vec<WhoisDate>,
    pub expiration_date: Vec<WhoisDate>,
    pub updated_date: Vec<WhoisDate>,
    /// EPP status codes (e.g. `clientTransferProhibited`)
    pub status: Vec<String>,
    /// Whole days until the first expiration date; `None` if it is unknown
    pub days_to_expiry: Option<i64>,
}

/// Result of probing one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisRecord {
    pub domain: String,
    pub result: Result<WhoisInfo, ProbeError>,
}

const COLUMNS: &[Column] = &[
    Column::new("registrar", "Registrar"),
    Column::new("registrant", "Registrant"),
    Column::new("creation_date", "Creation Date"),
    Column::new("expiration_date", "Expiration Date"),
    Column::new("days_to_expiry", "Days to Expiry"),
    Column::new("status", "Status"),
    Column::new("last_updated", "Last Updated"),
];

/// Export layout of WHOIS records.
pub const WHOIS_LAYOUT: Layout = Layout {
    identifier: Column::new("domain", "Domain"),
    columns: Columns::Fixed(COLUMNS),
};

fn render_dates(dates: &[WhoisDate]) -> String {
    dates
        .iter()
        .map(WhoisDate::render)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

impl ToRecord for WhoisRecord {
    fn to_record(&self) -> Record {
        let record = Record::new().with("domain", self.domain.as_str());
        match &self.result {
            Ok(info) => record
                .with("registrar", info.registrar.clone().unwrap_or_default())
                .with("registrant", info.registrant.clone().unwrap_or_default())
                .with("creation_date", render_dates(&info.creation_date))
                .with("expiration_date", render_dates(&info.expiration_date))
                .with("last_updated", render_dates(&info.updated_date))
                .with("days_to_expiry", info.days_to_expiry)
                .with("status", info.status.join(LIST_SEPARATOR)),
            Err(e) => {
                let mut record = record;
                for key in [
                    "registrar",
                    "registrant",
                    "creation_date",
                    "expiration_date",
                    "last_updated",
                    "days_to_expiry",
                    "status",
                ] {
                    record.push(key, FieldValue::error());
                }
                record.with(ERROR_KEY, e.message.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(4, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_render_dates() {
        let aware = DateTime::parse_from_rfc3339("1995-08-14T04:00:00Z").unwrap();
        assert_eq!(
            WhoisDate::Aware(aware).render(),
            "1995-08-14T04:00:00+00:00"
        );
        assert_eq!(
            WhoisDate::Naive(naive(2024, 8, 13)).render(),
            "2024-08-13T04:00:00"
        );
        assert_eq!(WhoisDate::Text("before 1996".into()).render(), "before 1996");
    }

    #[test]
    fn test_success_record() {
        let record = WhoisRecord {
            domain: "example.com".to_string(),
            result: Ok(WhoisInfo {
                registrar: Some("RESERVED-Internet Assigned Numbers Authority".into()),
                registrant: None,
                creation_date: vec![WhoisDate::Naive(naive(1995, 8, 14))],
                expiration_date: vec![
                    WhoisDate::Naive(naive(2025, 8, 13)),
                    WhoisDate::Naive(naive(2025, 8, 14)),
                ],
                updated_date: vec![],
                status: vec![
                    "clientDeleteProhibited".into(),
                    "clientTransferProhibited".into(),
                ],
                days_to_expiry: Some(42),
            }),
        }
        .to_record();

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(
            keys,
            [
                "domain",
                "registrar",
                "registrant",
                "creation_date",
                "expiration_date",
                "last_updated",
                "days_to_expiry",
                "status"
            ]
        );
        assert_eq!(record.get("registrant"), Some(&FieldValue::empty()));
        assert_eq!(record.get("last_updated"), Some(&FieldValue::empty()));
        assert_eq!(
            record.get("expiration_date"),
            Some(&FieldValue::from("2025-08-13T04:00:00, 2025-08-14T04:00:00"))
        );
        assert_eq!(
            record.get("status"),
            Some(&FieldValue::from(
                "clientDeleteProhibited, clientTransferProhibited"
            ))
        );
        assert_eq!(record.get("days_to_expiry"), Some(&FieldValue::Integer(42)));
    }

    #[test]
    fn test_unknown_expiry_is_empty() {
        let record = WhoisRecord {
            domain: "example.org".to_string(),
            result: Ok(WhoisInfo::default()),
        }
        .to_record();
        assert_eq!(record.get("days_to_expiry"), Some(&FieldValue::empty()));
    }

    #[test]
    fn test_failure_record() {
        let record = WhoisRecord {
            domain: "nonexistent-domain-xyz.com".to_string(),
            result: Err(ProbeError::not_found(
                "No WHOIS record found for nonexistent-domain-xyz.com",
            )),
        }
        .to_record();

        assert_eq!(record.len(), COLUMNS.len() + 2);
        for column in COLUMNS {
            assert_eq!(record.get(column.key), Some(&FieldValue::error()));
        }
        assert!(record.contains_key(ERROR_KEY));
    }
}
