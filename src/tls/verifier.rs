//! TLS client configuration.
//!
//! Certificates are verified against the Mozilla root set from `webpki-roots`,
//! except that an expired certificate is still accepted so that its metadata
//! (and a negative days-to-expiry) can be reported. An expired certificate
//! must still pass every other check at a moment inside its validity period.

use std::sync::Arc;
use std::time::Duration;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::client::{Resumption, WebPkiServerVerifier};
use rustls::crypto::{ring, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{CertificateError, ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};

use crate::error_handling::InitializationError;

/// WebPKI verification that lets expired certificates through.
#[derive(Debug)]
struct ExpiryTolerantVerifier {
    inner: Arc<WebPkiServerVerifier>,
}

fn is_expiry_error(error: &rustls::Error) -> bool {
    matches!(
        error,
        rustls::Error::InvalidCertificate(
            CertificateError::Expired | CertificateError::ExpiredContext { .. }
        )
    )
}

/// The last instant at which `end_entity` is valid (its `notAfter`).
fn last_valid_time(end_entity: &CertificateDer<'_>) -> Option<UnixTime> {
    let (_, cert) = x509_parser::parse_x509_certificate(end_entity.as_ref()).ok()?;
    let not_after = u64::try_from(cert.validity().not_after.timestamp()).ok()?;
    Some(UnixTime::since_unix_epoch(Duration::from_secs(not_after)))
}

impl ServerCertVerifier for ExpiryTolerantVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        match self.inner.verify_server_cert(
            end_entity,
            intermediates,
            server_name,
            ocsp_response,
            now,
        ) {
            // webpki stops at the validity check, so chain and name are
            // verified again at a time the leaf was still valid.
            Err(e) if is_expiry_error(&e) => match last_valid_time(end_entity) {
                Some(valid_at) => self.inner.verify_server_cert(
                    end_entity,
                    intermediates,
                    server_name,
                    ocsp_response,
                    valid_at,
                ),
                None => Err(e),
            },
            other => other,
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls12_signature(message, cert, dss)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls13_signature(message, cert, dss)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.inner.supported_verify_schemes()
    }
}

fn build_verifier(
    provider: Arc<CryptoProvider>,
) -> Result<ExpiryTolerantVerifier, InitializationError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let inner =
        WebPkiServerVerifier::builder_with_provider(Arc::new(root_store), provider).build()?;
    Ok(ExpiryTolerantVerifier { inner })
}

/// Builds the client configuration used for every certificate probe.
///
/// Session resumption is disabled: each probe is a fresh handshake.
///
/// # Errors
///
/// Returns an `InitializationError` if the verifier or protocol versions
/// cannot be set up with the `ring` provider.
pub fn build_client_config() -> Result<ClientConfig, InitializationError> {
    let provider = Arc::new(ring::default_provider());
    let verifier = build_verifier(Arc::clone(&provider))?;

    let mut config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(verifier))
        .with_no_client_auth();
    config.resumption = Resumption::disabled();

    Ok(config)
}
