//! WHOIS lookups through the `whois-service` client.
//!
//! The client handles server discovery (IANA bootstrap, referrals) and
//! extracts the common fields. [`WhoisSource`] is the seam the prober talks
//! to, so conversion and error handling can be exercised without a network.

use std::future::Future;
use std::time::Duration;

use whois_service::{WhoisClient, WhoisResponse};

use crate::config::WHOIS_TIMEOUT_SECS;
use crate::error_handling::{categorize_whois_error, InitializationError, ProbeError};

/// Fields the WHOIS client already extracted, as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub registrar: Option<String>,
    pub registrant_name: Option<String>,
    pub creation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub updated_date: Option<String>,
    pub status: Vec<String>,
}

/// One WHOIS answer: the raw text and, when the client could parse it, the
/// extracted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisAnswer {
    pub raw: String,
    pub parsed: Option<ParsedFields>,
}

impl From<&WhoisResponse> for WhoisAnswer {
    fn from(response: &WhoisResponse) -> Self {
        WhoisAnswer {
            raw: response.raw_data.clone(),
            parsed: response.parsed_data.as_ref().map(|parsed| ParsedFields {
                registrar: parsed.registrar.clone(),
                registrant_name: parsed.registrant_name.clone(),
                creation_date: parsed.creation_date.clone(),
                expiration_date: parsed.expiration_date.clone(),
                updated_date: parsed.updated_date.clone(),
                status: parsed.status.clone(),
            }),
        }
    }
}

/// Something that answers WHOIS queries.
pub trait WhoisSource {
    /// Looks up `domain`.
    ///
    /// # Errors
    ///
    /// Returns a `ProbeError` when no answer could be obtained.
    fn lookup(&self, domain: &str) -> impl Future<Output = Result<WhoisAnswer, ProbeError>>;
}

/// [`WhoisSource`] backed by `whois_service::WhoisClient`.
pub struct ServiceSource {
    client: WhoisClient,
    timeout: Duration,
}

impl ServiceSource {
    /// Creates the client once for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the client cannot be created.
    pub async fn connect() -> Result<Self, InitializationError> {
        let client = WhoisClient::new()
            .await
            .map_err(|e| InitializationError::WhoisClientError(e.to_string()))?;
        Ok(Self {
            client,
            timeout: Duration::from_secs(WHOIS_TIMEOUT_SECS),
        })
    }
}

impl WhoisSource for ServiceSource {
    async fn lookup(&self, domain: &str) -> Result<WhoisAnswer, ProbeError> {
        // The client's own timeouts are much longer than ours
        match tokio::time::timeout(self.timeout, self.client.lookup(domain)).await {
            Ok(Ok(response)) => Ok(WhoisAnswer::from(&response)),
            Ok(Err(e)) => {
                let message = e.to_string();
                Err(ProbeError::new(categorize_whois_error(&message), message))
            }
            Err(_) => Err(ProbeError::timeout(format!(
                "WHOIS lookup timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}
