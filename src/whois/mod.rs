//! WHOIS registration probe.
//!
//! Looks up each domain with the `whois-service` client (registry discovery
//! and registrar referrals happen there) and extracts registrar, registrant,
//! the creation/expiration/update dates and the EPP status codes.

mod parse;
mod source;
mod types;

use chrono::Utc;

use crate::batch::Prober;
use crate::error_handling::InitializationError;
use crate::initialization::ProbeLogger;

pub use parse::{convert_answer, is_not_found, parse_whois_date, registrant};
pub use source::{ParsedFields, ServiceSource, WhoisAnswer, WhoisSource};
pub use types::{WhoisDate, WhoisInfo, WhoisRecord, WHOIS_LAYOUT};

/// Looks up WHOIS registration data, one domain at a time.
pub struct WhoisProber<S = ServiceSource> {
    source: S,
    logger: ProbeLogger,
}

impl WhoisProber<ServiceSource> {
    /// Creates a prober backed by the `whois-service` client.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the client cannot be created.
    pub async fn connect(logger: &ProbeLogger) -> Result<Self, InitializationError> {
        Ok(Self::with_source(ServiceSource::connect().await?, logger))
    }
}

impl<S: WhoisSource> WhoisProber<S> {
    pub fn with_source(source: S, logger: &ProbeLogger) -> Self {
        Self {
            source,
            logger: logger.with_target("domain_probe::whois"),
        }
    }
}

impl<S: WhoisSource> Prober for WhoisProber<S> {
    type Output = WhoisRecord;

    async fn probe(&self, identifier: &str) -> WhoisRecord {
        self.logger
            .debug(format_args!("Starting WHOIS lookup for domain: {identifier}"));
        let result = match self.source.lookup(identifier).await {
            Ok(answer) => convert_answer(identifier, &answer, Utc::now()),
            Err(e) => Err(e),
        };
        match &result {
            Ok(info) => self.logger.debug(format_args!(
                "{identifier}: registrar {:?}, expiration {:?}",
                info.registrar,
                info.expiration_date.first().map(WhoisDate::render)
            )),
            Err(e) => self
                .logger
                .warn(format_args!("{identifier}: {} ({})", e.message, e.kind)),
        }
        WhoisRecord {
            domain: identifier.to_string(),
            result,
        }
    }

    fn is_failure(&self, output: &WhoisRecord) -> bool {
        output.result.is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{ProbeError, ProbeErrorKind};
    use crate::export::{FieldValue, ToRecord};

    /// Answers every lookup with the same canned result.
    struct Canned(Result<WhoisAnswer, ProbeError>);

    impl WhoisSource for Canned {
        async fn lookup(&self, _domain: &str) -> Result<WhoisAnswer, ProbeError> {
            self.0.clone()
        }
    }

    fn prober(answer: Result<WhoisAnswer, ProbeError>) -> WhoisProber<Canned> {
        WhoisProber::with_source(Canned(answer), &ProbeLogger::silent())
    }

    #[tokio::test]
    async fn test_probe_registered_domain() {
        let answer = WhoisAnswer {
            raw: "Domain Name: EXAMPLE.COM\r\nRegistrant Organization: Example Org\r\n".into(),
            parsed: Some(ParsedFields {
                registrar: Some("Test Registrar".into()),
                creation_date: Some("1995-08-14T04:00:00Z".into()),
                expiration_date: Some("2999-08-13T04:00:00Z".into()),
                status: vec![
                    "clientTransferProhibited https://icann.org/epp#clientTransferProhibited"
                        .into(),
                ],
                ..Default::default()
            }),
        };

        let prober = prober(Ok(answer));
        let record = prober.probe("example.com").await;
        assert_eq!(record.domain, "example.com");
        assert!(!prober.is_failure(&record));
        let info = record.result.as_ref().unwrap();
        assert_eq!(info.registrar.as_deref(), Some("Test Registrar"));
        assert_eq!(info.registrant.as_deref(), Some("Example Org"));
        assert!(info.days_to_expiry.unwrap() > 0);

        let exported = record.to_record();
        assert_eq!(
            exported.get("status"),
            Some(&FieldValue::from("clientTransferProhibited"))
        );
    }

    #[tokio::test]
    async fn test_probe_unregistered_domain() {
        let answer = WhoisAnswer {
            raw: "No match for \"NONEXISTENT-DOMAIN-XYZ.COM\".\r\n".into(),
            parsed: None,
        };

        let prober = prober(Ok(answer));
        let record = prober.probe("nonexistent-domain-xyz.com").await;
        assert!(prober.is_failure(&record));
        let err = record.result.as_ref().unwrap_err();
        assert_eq!(err.kind, ProbeErrorKind::NotFound);

        let exported = record.to_record();
        assert_eq!(exported.get("registrar"), Some(&FieldValue::error()));
        assert_eq!(exported.get("days_to_expiry"), Some(&FieldValue::error()));
    }

    #[tokio::test]
    async fn test_probe_lookup_failure_is_error_record() {
        let prober = prober(Err(ProbeError::timeout("WHOIS lookup timed out after 10s")));
        let record = prober.probe("slow.example").await;

        let exported = record.to_record();
        assert_eq!(exported.get("registrant"), Some(&FieldValue::error()));
        assert_eq!(
            exported.get("error"),
            Some(&FieldValue::from("WHOIS lookup timed out after 10s"))
        );
    }
}
