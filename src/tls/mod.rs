//! TLS/SSL certificate probe.
//!
//! This module connects to port 443 of each host and reads the leaf
//! certificate presented during the handshake:
//! - Certificate subject and issuer
//! - Validity period (not before/after dates) and days to expiry
//! - Serial number and X.509 version
//! - Negotiated TLS version
//!
//! Uses `tokio-rustls` for async TLS connections and `x509-parser` for certificate parsing.

mod extract;
#[cfg(test)]
mod test_certificate;
mod types;
mod verifier;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::app::normalize_hostname;
use crate::batch::Prober;
use crate::config::{TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS, TLS_PORT};
use crate::error_handling::{categorize_io_error, InitializationError, ProbeError};
use crate::initialization::ProbeLogger;

pub use extract::{extract_certificate_info, format_certificate_time, parse_certificate_time};
pub use types::{CertificateInfo, CertificateRecord, CERTIFICATE_LAYOUT};
pub use verifier::build_client_config;

/// Reads certificate metadata from HTTPS hosts.
///
/// The connector is built once; every probe still opens its own TCP
/// connection and performs a full handshake.
pub struct CertificateProber {
    connector: TlsConnector,
    logger: ProbeLogger,
}

impl CertificateProber {
    /// Creates a prober with the default client configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the TLS configuration cannot be built.
    pub fn new(logger: &ProbeLogger) -> Result<Self, InitializationError> {
        let config = build_client_config()?;
        Ok(Self {
            connector: TlsConnector::from(Arc::new(config)),
            logger: logger.with_target("domain_probe::tls"),
        })
    }

    /// Retrieves the certificate information for one host.
    ///
    /// # Arguments
    ///
    /// * `hostname` - A bare hostname (e.g., "example.com")
    ///
    /// # Errors
    ///
    /// - `Connection` if the name is invalid or the TCP connection fails
    /// - `Timeout` if connecting or the handshake exceeds its timeout
    /// - `Protocol` if the handshake fails or the certificate cannot be read
    pub async fn fetch(&self, hostname: &str) -> Result<CertificateInfo, ProbeError> {
        self.logger
            .debug(format_args!("Attempting to get SSL info for host: {hostname}"));

        let server_name = ServerName::try_from(hostname.to_string())
            .map_err(|e| ProbeError::connection(format!("Invalid host name '{hostname}': {e}")))?;

        let sock = match tokio::time::timeout(
            Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
            TcpStream::connect((hostname, TLS_PORT)),
        )
        .await
        {
            Ok(Ok(sock)) => sock,
            Ok(Err(e)) => {
                return Err(ProbeError::new(
                    categorize_io_error(&e),
                    format!("Failed to connect to {hostname}:{TLS_PORT} - {e}"),
                ));
            }
            Err(_) => {
                return Err(ProbeError::timeout(format!(
                    "TCP connection timeout for {hostname}:{TLS_PORT} ({TCP_CONNECT_TIMEOUT_SECS}s)"
                )));
            }
        };

        let tls_stream = match tokio::time::timeout(
            Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
            self.connector.connect(server_name, sock),
        )
        .await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                return Err(ProbeError::protocol(format!(
                    "TLS handshake failed for {hostname}: {e}"
                )));
            }
            Err(_) => {
                return Err(ProbeError::timeout(format!(
                    "TLS handshake timeout for {hostname} ({TLS_HANDSHAKE_TIMEOUT_SECS}s)"
                )));
            }
        };

        let (_, connection) = tls_stream.get_ref();
        let tls_version = connection
            .protocol_version()
            .map(|v| format!("{v:?}"))
            .unwrap_or_else(|| "Unknown".to_string());

        let leaf = connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .ok_or_else(|| {
                ProbeError::protocol(format!("No peer certificate presented by {hostname}"))
            })?;

        let info = extract_certificate_info(leaf.as_ref(), tls_version, Utc::now())?;
        self.logger.debug(format_args!(
            "Certificate for {hostname} expires {} ({} days)",
            format_certificate_time(info.not_after),
            info.days_to_expiry
        ));
        Ok(info)
    }
}

impl Prober for CertificateProber {
    type Output = CertificateRecord;

    async fn probe(&self, identifier: &str) -> CertificateRecord {
        let hostname = normalize_hostname(identifier);
        let result = self.fetch(&hostname).await;
        if let Err(e) = &result {
            self.logger
                .warn(format_args!("{hostname}: {} ({})", e.message, e.kind));
        }
        CertificateRecord { hostname, result }
    }

    fn is_failure(&self, output: &CertificateRecord) -> bool {
        output.result.is_err()
    }
}
