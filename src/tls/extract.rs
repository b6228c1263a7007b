//! Certificate extraction utilities.

use chrono::{DateTime, NaiveDateTime, Utc};
use x509_parser::certificate::X509Certificate;
use x509_parser::time::ASN1Time;

use crate::error_handling::ProbeError;
use crate::utils::days_until;

use super::types::CertificateInfo;

/// Textual validity timestamp format (`Jun  1 12:00:00 2025 GMT`), always UTC.
pub const CERTIFICATE_TIME_FORMAT: &str = "%b %e %H:%M:%S %Y GMT";

/// Renders a validity timestamp in [`CERTIFICATE_TIME_FORMAT`].
pub fn format_certificate_time(time: DateTime<Utc>) -> String {
    time.format(CERTIFICATE_TIME_FORMAT).to_string()
}

/// Parses a timestamp written in [`CERTIFICATE_TIME_FORMAT`] as UTC.
pub fn parse_certificate_time(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text.trim(), CERTIFICATE_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn asn1_to_utc(time: &ASN1Time, field: &str) -> Result<DateTime<Utc>, ProbeError> {
    DateTime::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| ProbeError::protocol(format!("Certificate {field} is out of range")))
}

/// Formats the serial number the way OpenSSL prints it: uppercase hex of the
/// integer bytes without the DER sign-padding zero.
fn format_serial(raw: &[u8]) -> String {
    let start = raw
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(raw.len().saturating_sub(1));
    raw[start..].iter().map(|b| format!("{b:02X}")).collect()
}

/// Extracts certificate metadata from a DER-encoded leaf certificate.
///
/// # Arguments
///
/// * `der` - The DER bytes of the peer's end-entity certificate
/// * `tls_version` - The negotiated protocol version, as text
/// * `now` - Reference time for days-to-expiry
///
/// # Errors
///
/// Returns a `Protocol` error if the certificate cannot be parsed.
pub fn extract_certificate_info(
    der: &[u8],
    tls_version: String,
    now: DateTime<Utc>,
) -> Result<CertificateInfo, ProbeError> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| ProbeError::protocol(format!("Failed to parse certificate: {e}")))?;
    certificate_info(&cert, tls_version, now)
}

fn certificate_info(
    cert: &X509Certificate<'_>,
    tls_version: String,
    now: DateTime<Utc>,
) -> Result<CertificateInfo, ProbeError> {
    let tbs_cert = &cert.tbs_certificate;

    let not_before = asn1_to_utc(&tbs_cert.validity.not_before, "notBefore")?;
    let not_after = asn1_to_utc(&tbs_cert.validity.not_after, "notAfter")?;

    Ok(CertificateInfo {
        issuer: tbs_cert.issuer.to_string(),
        subject: tbs_cert.subject.to_string(),
        not_before,
        not_after,
        days_to_expiry: days_until(not_after, now),
        serial_number: format_serial(tbs_cert.raw_serial()),
        version: tbs_cert.version.0 + 1,
        tls_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::test_certificate::test_cert_der;
    use chrono::TimeZone;

    fn not_after() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 11, 17, 22, 0, 54).unwrap()
    }

    #[test]
    fn test_extract_certificate_fields() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 22, 0, 54).unwrap();
        let info = extract_certificate_info(&test_cert_der(), "TLSv1_3".to_string(), now).unwrap();

        assert_eq!(info.subject, "C=US, O=Example Org, CN=example.com");
        assert_eq!(info.issuer, info.subject);
        assert_eq!(info.serial_number, "8F1B2C");
        assert_eq!(info.version, 3);
        assert_eq!(info.not_after, not_after());
        assert_eq!(
            info.not_before,
            Utc.with_ymd_and_hms(2026, 10, 18, 22, 0, 54).unwrap()
        );
        assert_eq!(info.days_to_expiry, 30);
        assert_eq!(info.tls_version, "TLSv1_3");
    }

    #[test]
    fn test_expired_certificate_has_negative_days() {
        // 45 days and a few hours after notAfter
        let now = not_after() + chrono::Duration::days(45) + chrono::Duration::hours(3);
        let info = extract_certificate_info(&test_cert_der(), "TLSv1_2".to_string(), now).unwrap();
        assert_eq!(info.days_to_expiry, -46);
    }

    #[test]
    fn test_garbage_is_protocol_error() {
        let err = extract_certificate_info(b"not a certificate", String::new(), Utc::now())
            .unwrap_err();
        assert_eq!(err.kind, crate::error_handling::ProbeErrorKind::Protocol);
    }

    #[test]
    fn test_certificate_time_round_trip() {
        let text = format_certificate_time(not_after());
        assert_eq!(text, "Nov 17 22:00:54 2026 GMT");
        assert_eq!(parse_certificate_time(&text), Some(not_after()));
    }

    #[test]
    fn test_parse_certificate_time_space_padded_day() {
        let parsed = parse_certificate_time("Jan  5 08:30:00 2025 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 5, 8, 30, 0).unwrap());
        assert!(parse_certificate_time("2025-01-05").is_none());
    }

    #[test]
    fn test_format_serial_strips_sign_padding() {
        assert_eq!(format_serial(&[0x00, 0x8F, 0x1B]), "8F1B");
        assert_eq!(format_serial(&[0x0A, 0x1B]), "0A1B");
        assert_eq!(format_serial(&[0x00]), "00");
    }
}
